//! Declarative rule schema and the single loop that evaluates it.
//!
//! A [`Section`] is a list of [`Rule`]s. Rules are data: keys with their
//! placeholder literals and parsers live in [`KeySpec`], predicates over
//! the configuration map in [`Condition`].

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::envfile::ConfigMap;

/// How a value must parse to count as valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValueKind {
    #[default]
    Text,
    Integer,
    Float,
}

impl ValueKind {
    /// Numbers are read from the leading prefix, so `4000 # tokens` is an
    /// integer and `0.7 # creative` a float.
    pub fn accepts(self, value: &str) -> bool {
        match self {
            ValueKind::Text => true,
            ValueKind::Integer => leading_int(value).is_some(),
            ValueKind::Float => leading_float(value).is_some(),
        }
    }
}

fn digits_len(s: &str) -> usize {
    s.bytes().take_while(u8::is_ascii_digit).count()
}

fn sign_len(s: &str) -> usize {
    usize::from(s.starts_with(['+', '-']))
}

/// Integer at the start of `value` after leading whitespace; trailing text
/// is ignored. Out-of-range digits saturate.
pub fn leading_int(value: &str) -> Option<i64> {
    let s = value.trim_start();
    let sign = sign_len(s);
    let digits = digits_len(&s[sign..]);
    if digits == 0 {
        return None;
    }
    let prefix = &s[..sign + digits];
    match prefix.parse::<i64>() {
        Ok(n) => Some(n),
        Err(_) if prefix.starts_with('-') => Some(i64::MIN),
        Err(_) => Some(i64::MAX),
    }
}

/// Decimal number (optional fraction and exponent) or `Infinity` at the
/// start of `value`; trailing text is ignored.
pub fn leading_float(value: &str) -> Option<f64> {
    let s = value.trim_start();
    let sign = sign_len(s);
    let body = &s[sign..];
    if body.starts_with("Infinity") {
        let inf = if s.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
        return Some(inf);
    }

    let int_digits = digits_len(body);
    let mut end = int_digits;
    let mut frac_digits = 0;
    if body[end..].starts_with('.') {
        frac_digits = digits_len(&body[end + 1..]);
        end += 1 + frac_digits;
    }
    if int_digits + frac_digits == 0 {
        return None;
    }
    if body[end..].starts_with(['e', 'E']) {
        let exp = &body[end + 1..];
        let exp_sign = sign_len(exp);
        let exp_digits = digits_len(&exp[exp_sign..]);
        if exp_digits > 0 {
            end += 1 + exp_sign + exp_digits;
        }
    }
    s[..sign + end].parse::<f64>().ok()
}

/// One configuration key: name, fallback names, placeholder, parser, default.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct KeySpec {
    pub key: String,
    pub aliases: Vec<String>,
    pub placeholder: Option<String>,
    pub kind: ValueKind,
    pub default: Option<String>,
}

impl KeySpec {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn kind(mut self, kind: ValueKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn default_value(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// First non-empty value among the key and its aliases.
    pub fn lookup<'a>(&self, env: &'a ConfigMap) -> Option<&'a str> {
        std::iter::once(&self.key)
            .chain(self.aliases.iter())
            .find_map(|k| env.get(k))
    }

    /// [`KeySpec::lookup`] falling back to the declared default.
    pub fn value_or_default<'a>(&'a self, env: &'a ConfigMap) -> Option<&'a str> {
        self.lookup(env).or(self.default.as_deref())
    }

    /// Set, and not equal to the placeholder literal.
    pub fn is_configured(&self, env: &ConfigMap) -> bool {
        match self.lookup(env) {
            Some(value) => self.placeholder.as_deref() != Some(value),
            None => false,
        }
    }

    /// Set, and accepted by the key's [`ValueKind`].
    pub fn is_valid(&self, env: &ConfigMap) -> bool {
        self.lookup(env)
            .map(|v| self.kind.accepts(v))
            .unwrap_or(false)
    }
}

/// Predicate over the configuration map.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    /// Value is exactly `"true"`.
    Flag(String),
    /// Value is anything but exactly `"false"` (absent counts as enabled).
    NotDisabled(String),
    Set(KeySpec),
    Configured(KeySpec),
    Valid(KeySpec),
    /// Value (or default) equals the literal.
    Equals(KeySpec, String),
    /// Value (or default) parses as an integer below the bound.
    Below(KeySpec, i64),
    /// Value has fewer characters than the bound.
    ShorterThan(KeySpec, usize),
    Not(Box<Condition>),
    Any(Vec<Condition>),
    All(Vec<Condition>),
}

impl Condition {
    pub fn flag(key: impl Into<String>) -> Self {
        Condition::Flag(key.into())
    }

    pub fn not_disabled(key: impl Into<String>) -> Self {
        Condition::NotDisabled(key.into())
    }

    pub fn negate(self) -> Self {
        Condition::Not(Box::new(self))
    }

    pub fn holds(&self, env: &ConfigMap) -> bool {
        match self {
            Condition::Flag(key) => env.flag(key),
            Condition::NotDisabled(key) => env.not_disabled(key),
            Condition::Set(spec) => spec.lookup(env).is_some(),
            Condition::Configured(spec) => spec.is_configured(env),
            Condition::Valid(spec) => spec.is_valid(env),
            Condition::Equals(spec, expected) => {
                spec.value_or_default(env) == Some(expected.as_str())
            }
            Condition::Below(spec, bound) => spec
                .value_or_default(env)
                .and_then(leading_int)
                .map(|n| n < *bound)
                .unwrap_or(false),
            Condition::ShorterThan(spec, min) => spec
                .lookup(env)
                .map(|v| v.chars().count() < *min)
                .unwrap_or(false),
            Condition::Not(inner) => !inner.holds(env),
            Condition::Any(all) => all.iter().any(|c| c.holds(env)),
            Condition::All(all) => all.iter().all(|c| c.holds(env)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusLevel {
    Ok,
    Missing,
    Disabled,
    Info,
}

/// A progress line shown under a section heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusLine {
    pub level: StatusLevel,
    pub text: String,
}

impl StatusLine {
    pub fn new(level: StatusLevel, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
        }
    }
}

/// A conditional block of rules.
#[derive(Debug, Clone, PartialEq)]
pub struct Branch {
    pub when: Condition,
    pub then: Vec<Rule>,
    pub otherwise: Vec<Rule>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Rule {
    Status(StatusLine),
    Emit { severity: Severity, message: String },
    When(Branch),
    /// Evaluates every branch and counts the ones whose condition held.
    /// `none` runs when the count is zero; otherwise `summary` is emitted
    /// as an info status with `{count}` replaced.
    Tally {
        branches: Vec<Branch>,
        none: Vec<Rule>,
        summary: String,
    },
}

impl Rule {
    pub fn status(level: StatusLevel, text: impl Into<String>) -> Self {
        Rule::Status(StatusLine::new(level, text))
    }

    pub fn error(message: impl Into<String>) -> Self {
        Rule::Emit {
            severity: Severity::Error,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Rule::Emit {
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    pub fn when(when: Condition, then: Vec<Rule>, otherwise: Vec<Rule>) -> Self {
        Rule::When(Branch {
            when,
            then,
            otherwise,
        })
    }

    pub fn error_if(when: Condition, message: impl Into<String>) -> Self {
        Rule::when(when, vec![Rule::error(message)], vec![])
    }

    pub fn warn_if(when: Condition, message: impl Into<String>) -> Self {
        Rule::when(when, vec![Rule::warning(message)], vec![])
    }
}

/// Outcome of one section: progress lines plus its errors and warnings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionReport {
    pub title: String,
    pub statuses: Vec<StatusLine>,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl SectionReport {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }

    pub fn statuses_at(&self, level: StatusLevel) -> impl Iterator<Item = &str> {
        self.statuses
            .iter()
            .filter(move |s| s.level == level)
            .map(|s| s.text.as_str())
    }
}

/// A named group of rules checked together.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub title: String,
    pub rules: Vec<Rule>,
}

impl Section {
    pub fn new(title: impl Into<String>, rules: Vec<Rule>) -> Self {
        Self {
            title: title.into(),
            rules,
        }
    }

    pub fn evaluate(&self, env: &ConfigMap) -> SectionReport {
        let mut report = SectionReport {
            title: self.title.clone(),
            ..SectionReport::default()
        };
        apply(&self.rules, env, &mut report);
        debug!(
            "{}: {} error(s), {} warning(s)",
            self.title,
            report.errors.len(),
            report.warnings.len()
        );
        report
    }
}

fn apply(rules: &[Rule], env: &ConfigMap, report: &mut SectionReport) {
    for rule in rules {
        match rule {
            Rule::Status(line) => report.statuses.push(line.clone()),
            Rule::Emit { severity, message } => match severity {
                Severity::Error => report.errors.push(message.clone()),
                Severity::Warning => report.warnings.push(message.clone()),
            },
            Rule::When(branch) => {
                apply_branch(branch, env, report);
            }
            Rule::Tally {
                branches,
                none,
                summary,
            } => {
                let count = branches
                    .iter()
                    .filter(|b| apply_branch(b, env, report))
                    .count();
                if count == 0 {
                    apply(none, env, report);
                } else {
                    report.statuses.push(StatusLine::new(
                        StatusLevel::Info,
                        summary.replace("{count}", &count.to_string()),
                    ));
                }
            }
        }
    }
}

/// Runs the matching arm and reports whether the condition held.
fn apply_branch(branch: &Branch, env: &ConfigMap, report: &mut SectionReport) -> bool {
    let held = branch.when.holds(env);
    let arm = if held { &branch.then } else { &branch.otherwise };
    apply(arm, env, report);
    held
}
