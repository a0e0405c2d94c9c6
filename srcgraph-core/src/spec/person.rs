//! Person specs: `login`, `email@example.com` or `$uid`.

use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{RouteSpec, RouteVars, keys, required_var};
use crate::error::SpecError;

const KIND: &str = "person";

/// Identifies a person by exactly one of login, email address or numeric UID.
///
/// The text form is positional and has no escaping: a leading `$` means UID,
/// otherwise any `@` means email, otherwise the text is a login. [`Login`] and
/// [`Email`] can only be built from text that reads back as the same variant,
/// so every value formats to text that parses to an equal value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PersonSpec {
  Login(Login),
  Email(Email),
  Uid(NonZeroU32),
}

/// A login name: non-empty, no `@`, no leading `$`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Login(String);

impl Login {
  pub fn new(login: impl Into<String>) -> Result<Self, SpecError> {
    let login = login.into();
    if login.is_empty() {
      return Err(SpecError::invalid(KIND, login, "empty login"));
    }
    if login.starts_with('$') {
      return Err(SpecError::invalid(KIND, login, "login cannot start with `$`"));
    }
    if login.contains('@') {
      return Err(SpecError::invalid(KIND, login, "login cannot contain `@`"));
    }
    Ok(Self(login))
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

/// An email address: contains `@`, no leading `$`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Email(String);

impl Email {
  pub fn new(email: impl Into<String>) -> Result<Self, SpecError> {
    let email = email.into();
    if email.starts_with('$') {
      return Err(SpecError::invalid(KIND, email, "email cannot start with `$`"));
    }
    if !email.contains('@') {
      return Err(SpecError::invalid(KIND, email, "email must contain `@`"));
    }
    Ok(Self(email))
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl PersonSpec {
  /// Parse the compact text form of a person spec.
  pub fn parse(text: &str) -> Result<Self, SpecError> {
    if let Some(digits) = text.strip_prefix('$') {
      return parse_uid(text, digits).map(Self::Uid);
    }
    if text.is_empty() {
      return Err(SpecError::invalid(KIND, text, "empty spec"));
    }
    if text.contains('@') {
      Ok(Self::Email(Email(text.to_string())))
    } else {
      Ok(Self::Login(Login(text.to_string())))
    }
  }

  pub fn from_login(login: impl Into<String>) -> Result<Self, SpecError> {
    Login::new(login).map(Self::Login)
  }

  pub fn from_email(email: impl Into<String>) -> Result<Self, SpecError> {
    Email::new(email).map(Self::Email)
  }

  /// A UID spec; zero is not a valid UID.
  pub fn from_uid(uid: u32) -> Result<Self, SpecError> {
    NonZeroU32::new(uid)
      .map(Self::Uid)
      .ok_or_else(|| SpecError::invalid(KIND, format!("${uid}"), "UID must be positive"))
  }

  pub fn login(&self) -> Option<&str> {
    match self {
      Self::Login(login) => Some(login.as_str()),
      _ => None,
    }
  }

  pub fn email(&self) -> Option<&str> {
    match self {
      Self::Email(email) => Some(email.as_str()),
      _ => None,
    }
  }

  pub fn uid(&self) -> Option<u32> {
    match self {
      Self::Uid(uid) => Some(uid.get()),
      _ => None,
    }
  }
}

/// UIDs must be canonical decimal (no sign, no leading zeros) and non-zero so
/// that formatting a parsed spec reproduces the input exactly.
fn parse_uid(text: &str, digits: &str) -> Result<NonZeroU32, SpecError> {
  if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
    return Err(SpecError::invalid(KIND, text, "UID is not a number"));
  }
  if digits.starts_with('0') {
    return Err(SpecError::invalid(KIND, text, "UID must be a positive number without leading zeros"));
  }
  digits
    .parse::<NonZeroU32>()
    .map_err(|_| SpecError::invalid(KIND, text, "UID is out of range"))
}

impl fmt::Display for Login {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

impl fmt::Display for Email {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

impl fmt::Display for PersonSpec {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Login(login) => fmt::Display::fmt(login, f),
      Self::Email(email) => fmt::Display::fmt(email, f),
      Self::Uid(uid) => write!(f, "${uid}"),
    }
  }
}

impl FromStr for PersonSpec {
  type Err = SpecError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::parse(s)
  }
}

impl TryFrom<String> for PersonSpec {
  type Error = SpecError;

  fn try_from(value: String) -> Result<Self, Self::Error> {
    Self::parse(&value)
  }
}

impl From<PersonSpec> for String {
  fn from(spec: PersonSpec) -> Self {
    spec.to_string()
  }
}

impl RouteSpec for PersonSpec {
  fn route_vars(&self) -> RouteVars {
    RouteVars::from([(keys::PERSON_SPEC.to_string(), self.to_string())])
  }

  fn from_route_vars(vars: &RouteVars) -> Result<Self, SpecError> {
    Self::parse(required_var(vars, KIND, keys::PERSON_SPEC)?)
  }
}

#[cfg(test)]
mod tests {
  use test_case::test_case;

  use super::*;

  fn login(text: &str) -> PersonSpec {
    PersonSpec::from_login(text).unwrap()
  }

  fn email(text: &str) -> PersonSpec {
    PersonSpec::from_email(text).unwrap()
  }

  fn uid(value: u32) -> PersonSpec {
    PersonSpec::from_uid(value).unwrap()
  }

  #[test_case("a", login("a") ; "login")]
  #[test_case("a@a.com", email("a@a.com") ; "email")]
  #[test_case("$1", uid(1) ; "uid")]
  #[test_case("$4294967295", uid(u32::MAX) ; "max uid")]
  #[test_case("alice.smith-2", login("alice.smith-2") ; "login with punctuation")]
  #[test_case("@", email("@") ; "bare at sign is an email")]
  fn test_parse_and_format(text: &str, expected: PersonSpec) {
    let spec = PersonSpec::parse(text).unwrap();
    assert_eq!(spec, expected);
    assert_eq!(spec.to_string(), text);
  }

  #[test_case("$x" ; "non numeric uid")]
  #[test_case("$" ; "empty uid")]
  #[test_case("$-1" ; "negative uid")]
  #[test_case("$+1" ; "signed uid")]
  #[test_case("$01" ; "leading zero")]
  #[test_case("$0" ; "zero uid")]
  #[test_case("$4294967296" ; "uid overflow")]
  #[test_case("" ; "empty")]
  fn test_parse_rejects(text: &str) {
    let err = PersonSpec::parse(text).unwrap_err();
    assert_eq!(err.kind(), "person");
  }

  #[test]
  fn test_dollar_prefix_wins_over_at_sign() {
    // `$` is checked before `@`, so this is a (malformed) UID, not an email
    assert!(PersonSpec::parse("$a@b.com").is_err());
  }

  #[test_case("" ; "empty")]
  #[test_case("x@y" ; "at sign reads back as email")]
  #[test_case("$5" ; "dollar reads back as uid")]
  fn test_login_rejects(text: &str) {
    assert!(PersonSpec::from_login(text).is_err());
  }

  #[test_case("" ; "empty")]
  #[test_case("alice" ; "no at sign reads back as login")]
  #[test_case("$a@b.com" ; "dollar reads back as uid")]
  fn test_email_rejects(text: &str) {
    assert!(PersonSpec::from_email(text).is_err());
  }

  #[test]
  fn test_zero_uid_rejected() {
    let err = PersonSpec::from_uid(0).unwrap_err();
    assert_eq!(err.kind(), "person");
  }

  #[test]
  fn test_constructed_specs_round_trip() {
    let specs = [
      login("sqs"),
      login("a.b"),
      email("sqs@sourcegraph.com"),
      email("@"),
      uid(42),
      uid(u32::MAX),
    ];
    for spec in specs {
      let text = spec.to_string();
      assert_eq!(PersonSpec::parse(&text).unwrap(), spec);
      assert_eq!(PersonSpec::from_route_vars(&spec.route_vars()).unwrap(), spec);
    }
  }

  #[test]
  fn test_accessors() {
    let spec = uid(7);
    assert_eq!(spec.uid(), Some(7));
    assert_eq!(spec.login(), None);
    assert_eq!(spec.email(), None);
    assert_eq!(login("a").login(), Some("a"));
    assert_eq!(email("a@a.com").email(), Some("a@a.com"));
  }

  #[test]
  fn test_from_str() {
    let spec: PersonSpec = "$12".parse().unwrap();
    assert_eq!(spec, uid(12));
  }

  #[test]
  fn test_route_vars_round_trip() {
    let spec = email("a@a.com");
    let vars = spec.route_vars();
    assert_eq!(vars.get("PersonSpec").map(String::as_str), Some("a@a.com"));
    assert_eq!(PersonSpec::from_route_vars(&vars).unwrap(), spec);
  }

  #[test]
  fn test_serde_uses_text_form() {
    let json = serde_json::to_string(&uid(3)).unwrap();
    assert_eq!(json, "\"$3\"");

    let spec: PersonSpec = serde_json::from_str("\"bob\"").unwrap();
    assert_eq!(spec, login("bob"));

    assert!(serde_json::from_str::<PersonSpec>("\"$nope\"").is_err());
    assert!(serde_json::from_str::<PersonSpec>("\"$0\"").is_err());
  }
}
