//! Reusable form dialog.
//!
//! Create / edit commands open a single `Modal` with the fields that were
//! not supplied on the command line. Each field is read from the modal's
//! input (stdin in the binary, an in-memory reader in tests); an empty
//! answer keeps the field's default value.

use crate::errors::AppResult;
use std::collections::BTreeMap;
use std::io::{self, BufRead, Write};

#[derive(Debug, Clone)]
pub struct Field {
    pub key: &'static str,
    pub label: &'static str,
    pub default: String,
}

impl Field {
    pub fn new(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            default: String::new(),
        }
    }

    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = default.into();
        self
    }
}

/// Values collected by a modal, keyed by field key. Always trimmed.
#[derive(Debug, Clone, Default)]
pub struct FormValues {
    values: BTreeMap<&'static str, String>,
}

impl FormValues {
    pub fn get(&self, key: &str) -> &str {
        self.values.get(key).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, key: &'static str, value: impl Into<String>) {
        self.values.insert(key, value.into().trim().to_string());
    }
}

pub struct Modal<R: BufRead, W: Write> {
    input: R,
    output: W,
    open: bool,
}

impl Modal<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Modal::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Modal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            open: false,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Show `title` and collect every field, starting from `prefilled`.
    /// Fields whose key is already present in `prefilled` are not asked.
    pub fn open(
        &mut self,
        title: &str,
        fields: &[Field],
        mut prefilled: FormValues,
    ) -> AppResult<FormValues> {
        let pending: Vec<&Field> = fields
            .iter()
            .filter(|f| !prefilled.values.contains_key(f.key))
            .collect();

        if pending.is_empty() {
            return Ok(prefilled);
        }

        self.open = true;
        writeln!(self.output, "── {} ──", title)?;

        for field in pending {
            if field.default.is_empty() {
                write!(self.output, "{}: ", field.label)?;
            } else {
                write!(self.output, "{} [{}]: ", field.label, field.default)?;
            }
            self.output.flush()?;

            let mut line = String::new();
            let read = self.input.read_line(&mut line)?;
            let answer = line.trim();

            let value = if read == 0 || answer.is_empty() {
                field.default.clone()
            } else {
                answer.to_string()
            };
            prefilled.set(field.key, value);
        }

        Ok(prefilled)
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

/// Collect flags that were given on the command line into a prefilled form.
pub fn prefill(pairs: &[(&'static str, Option<&String>)]) -> FormValues {
    let mut form = FormValues::default();
    for (key, value) in pairs {
        if let Some(v) = value {
            form.set(*key, v.as_str());
        }
    }
    form
}
