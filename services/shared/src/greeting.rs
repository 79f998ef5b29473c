//! Greetings printed by the CLI's hello mode

/// Greeting of the flip counter package
pub fn alpha_greeting() -> &'static str {
    "Hello from alpha!"
}

/// Greetings of the analysis package; it greets on behalf of the counter too
pub fn beta_greetings() -> [&'static str; 2] {
    ["Hello from beta!", alpha_greeting()]
}
