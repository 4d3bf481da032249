//! Casing transforms over delimiter-split words
//!
//! All five transforms share one tokenizer: the input is split on every
//! character that is not alphanumeric, and the resulting maximal
//! alphanumeric runs are the words. `"Hello, World!"` and `"hello world"`
//! therefore case identically. Empty input produces empty output in every
//! style, and the transforms are total.

use serde::{Deserialize, Serialize};

/// Words of the input: maximal alphanumeric runs, in order.
fn words<'a>(input: &'a str) -> impl Iterator<Item = &'a str> + 'a {
    input
        .split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
}

/// Uppercase the first character, lowercase the rest.
fn capitalized(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(|c| c.to_lowercase()))
            .collect(),
        None => String::new(),
    }
}

/// Convert to PascalCase: every word capitalized, no separator.
///
/// # Example
/// ```
/// use actionkit_core::text::casing;
///
/// assert_eq!(casing::pascal_case("hello world"), "HelloWorld");
/// assert_eq!(casing::pascal_case("興-DATA_feed"), "興DataFeed");
/// ```
pub fn pascal_case(input: &str) -> String {
    words(input).map(capitalized).collect()
}

/// Convert to camelCase: PascalCase with the first character lowercased.
///
/// # Example
/// ```
/// use actionkit_core::text::casing;
///
/// assert_eq!(casing::camel_case("hello world"), "helloWorld");
/// ```
pub fn camel_case(input: &str) -> String {
    let pascal = pascal_case(input);
    let mut chars = pascal.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Convert to snake_case: lowercased words joined by underscores.
pub fn snake_case(input: &str) -> String {
    words(input)
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("_")
}

/// Convert to CONSTANT_CASE: snake_case, uppercased.
pub fn constant_case(input: &str) -> String {
    snake_case(input).to_uppercase()
}

/// Convert to dash-case: lowercased words joined by hyphens.
pub fn dash_case(input: &str) -> String {
    words(input)
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

/// The five supported casing styles.
///
/// Value types that cross a host boundary serialize with serde; styles use
/// their lowercase names (`"pascal"`, `"camel"`, ...) on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CasingStyle {
    Pascal,
    Camel,
    Snake,
    Constant,
    Dash,
}

impl CasingStyle {
    /// Apply this style to the input.
    ///
    /// # Example
    /// ```
    /// use actionkit_core::CasingStyle;
    ///
    /// assert_eq!(CasingStyle::Snake.apply("Hello World!"), "hello_world");
    /// ```
    pub fn apply(self, input: &str) -> String {
        match self {
            CasingStyle::Pascal => pascal_case(input),
            CasingStyle::Camel => camel_case(input),
            CasingStyle::Snake => snake_case(input),
            CasingStyle::Constant => constant_case(input),
            CasingStyle::Dash => dash_case(input),
        }
    }
}
