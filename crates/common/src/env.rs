use std::{env, str::FromStr};

/// Parse an `envvar` as `T`. Return `fallback` if env missing or parsing fails.
pub fn parse_env_or<T: FromStr>(envvar: &str, fallback: T) -> T {
    parse_env_value(env::var(envvar).ok().as_deref()).unwrap_or(fallback)
}

fn parse_env_value<T: FromStr>(raw: Option<&str>) -> Option<T> {
    raw.and_then(|s| T::from_str(s.trim()).ok())
}
