// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

#[cfg(test)]
use std::collections::HashMap;

pub const PROCDOC_LOG: &str = "PROCDOC_LOG";
pub const PROCDOC_TARGET: &str = "PROCDOC_TARGET";
pub const PROCDOC_DELIMITER: &str = "PROCDOC_DELIMITER";
pub const PROCDOC_TITLE: &str = "PROCDOC_TITLE";
pub const PROCDOC_BASE_URL: &str = "PROCDOC_BASE_URL";
pub const PROCDOC_COLOR: &str = "PROCDOC_COLOR";

pub trait Environment: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;

    /// `None` when the variable is not set
    fn enabled(&self, key: &str) -> Result<Option<bool>, EnvError> {
        match self.get(key) {
            Some(value) => match value.to_lowercase().as_str() {
                "true" | "1" | "yes" | "on" | "enabled" | "enable" => Ok(Some(true)),
                "false" | "0" | "no" | "off" | "disabled" | "disable" => Ok(Some(false)),
                _ => Err(EnvError::InvalidBoolean {
                    key: key.to_string(),
                    value,
                }),
            },
            None => Ok(None),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum EnvError {
    #[error(
        "Invalid value for {key}: {value}. Expected true, 1, yes, on, enabled, enable OR false, 0, no, off, disabled, disable"
    )]
    InvalidBoolean { key: String, value: String },
}

pub struct SystemEnvironment;

impl Environment for SystemEnvironment {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub struct MapEnvironment {
    values: HashMap<String, String>,
}

#[cfg(test)]
impl Environment for MapEnvironment {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

#[cfg(test)]
impl<const N: usize> From<[(&str, &str); N]> for MapEnvironment {
    fn from(values: [(&str, &str); N]) -> Self {
        Self {
            values: HashMap::from_iter(
                values
                    .into_iter()
                    .map(|(k, v)| (k.to_string(), v.to_string())),
            ),
        }
    }
}
