/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use std::env;
use std::fmt::Debug;
use std::str::FromStr;
use tracing::warn;

/// Reads and parses an environment variable, falling back to `default`
///
/// The raw value is parsed first, so strings (passwords, names) come back
/// verbatim. Surrounding whitespace is only stripped when the raw value does
/// not parse, e.g. `" 30 "` for a number. A variable that still fails to
/// parse is logged and replaced by the default.
///
/// # Arguments
///
/// * `env_var` - Name of the environment variable
/// * `default` - Value used when the variable is unset or unparsable
pub fn get_env_or_default<T: FromStr>(env_var: &str, default: T) -> T
where
    <T as FromStr>::Err: Debug,
{
    match env::var(env_var) {
        Ok(val) => parse_raw_then_trimmed::<T>(&val).unwrap_or_else(|e| {
            warn!("Failed to parse {}={:?} ({:?}), using default", env_var, val, e);
            default
        }),
        Err(_) => default,
    }
}

/// Reads and parses an environment variable, returning `None` when it is
/// unset, blank or unparsable
///
/// Non-blank strings are returned verbatim, as in [`get_env_or_default`].
pub fn get_env_or_none<T: FromStr>(env_var: &str) -> Option<T>
where
    <T as FromStr>::Err: Debug,
{
    env::var(env_var)
        .ok()
        .filter(|val| !val.trim().is_empty())
        .and_then(|val| parse_raw_then_trimmed::<T>(&val).ok())
}

fn parse_raw_then_trimmed<T: FromStr>(val: &str) -> Result<T, T::Err> {
    val.parse::<T>().or_else(|_| val.trim().parse::<T>())
}

/// Reads a boolean switch such as `SMOKE_UNIQUE_EMAIL`
///
/// Accepts `1`, `true`, `yes` and `on` (case-insensitive) as true and
/// `0`, `false`, `no` and `off` as false. Anything else yields `default`.
pub fn get_env_flag(env_var: &str, default: bool) -> bool {
    match env::var(env_var) {
        Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => true,
            "0" | "false" | "no" | "off" => false,
            _ => {
                warn!("Unrecognised value for {}: {:?}, using {}", env_var, val, default);
                default
            }
        },
        Err(_) => default,
    }
}
