//! Use `OrEnvExt` when you have a cli arg (e.g. `lang: Option<Locale>`) that
//! can also be set by a "fallback" env variable (e.g. `$LANG`). Then, when
//! initializing the args, just use `lang.or_env_mut("LANG")?`.
//!
//! This works with any `FromStr` type, in which case it will parse the env
//! value and return an error if that fails.

use std::{env, str::FromStr};

use anyhow::Context;

pub trait OrEnvExt {
    /// If the arg is not set, initialize the arg from env by mutating the arg
    /// in place.
    fn or_env_mut(
        &mut self,
        env_var: &'static str,
    ) -> anyhow::Result<&mut Self>;
}

impl<T> OrEnvExt for Option<T>
where
    T: FromStr,
    T::Err: Into<anyhow::Error>,
{
    fn or_env_mut(
        &mut self,
        env_var: &'static str,
    ) -> anyhow::Result<&mut Option<T>> {
        or_lookup_mut(self, env_var, |key| env::var(key))
    }
}

/// [`OrEnvExt::or_env_mut`] with the env lookup passed in.
fn or_lookup_mut<'a, T>(
    arg: &'a mut Option<T>,
    env_var: &'static str,
    lookup: impl FnOnce(&'static str) -> Result<String, env::VarError>,
) -> anyhow::Result<&'a mut Option<T>>
where
    T: FromStr,
    T::Err: Into<anyhow::Error>,
{
    if arg.is_none() {
        // If no env var, do nothing. Error if not UTF-8 encoded.
        let val_str = match non_empty(lookup(env_var)).context(env_var)? {
            Some(v) => v,
            None => return Ok(arg),
        };
        let val = T::from_str(&val_str)
            .map_err(Into::into)
            .with_context(|| format!("Invalid env value `${env_var}`"))?;
        *arg = Some(val);
    }

    Ok(arg)
}

/// Empty values count as unset, so e.g. `LANG= machine-name ..` behaves like
/// `LANG` not being set at all.
fn non_empty(
    var: Result<String, env::VarError>,
) -> anyhow::Result<Option<String>> {
    match var {
        Ok(val_str) if val_str.is_empty() => Ok(None),
        Ok(val_str) => Ok(Some(val_str)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(s)) =>
            Err(anyhow::format_err!("invalid unicode: '{:?}'", s)),
    }
}
