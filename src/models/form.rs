use super::bill::{BillField, BillForm};
use super::comparison::{CompareField, CompareForm};
use super::error::AppError;
use std::rc::Rc;
use yew::Reducible;

/// A typed form input, addressable by its HTML `name` attribute.
pub trait FormField: Copy + PartialEq + 'static {
    fn name(&self) -> &'static str;

    fn all() -> &'static [Self];

    fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|f| f.name() == name)
    }
}

/// Edits dispatched to a form reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum FormAction<F> {
    Set(F, String),
    Reset,
}

impl Reducible for BillForm {
    type Action = FormAction<BillField>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            FormAction::Set(field, value) => {
                if self.value(field) == value {
                    return self;
                }
                let mut next = (*self).clone();
                next.set(field, value);
                Rc::new(next)
            }
            FormAction::Reset if self.is_empty() => self,
            FormAction::Reset => Rc::new(Self::default()),
        }
    }
}

impl Reducible for CompareForm {
    type Action = FormAction<CompareField>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            FormAction::Set(field, value) => {
                if self.value(field) == value {
                    return self;
                }
                let mut next = (*self).clone();
                next.set(field, value);
                Rc::new(next)
            }
            FormAction::Reset if self.is_empty() => self,
            FormAction::Reset => Rc::new(Self::default()),
        }
    }
}

pub(crate) fn required(value: &str, label: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation(format!("{label} is required")));
    }
    Ok(trimmed.to_string())
}

/// Parses a non-negative number; `allow_zero = false` also rejects zero.
pub(crate) fn parse_amount(value: &str, label: &str, allow_zero: bool) -> Result<f64, AppError> {
    let parsed: f64 = value
        .trim()
        .parse()
        .map_err(|_| AppError::Validation(format!("{label} must be a number")))?;

    if !parsed.is_finite() || parsed < 0.0 || (!allow_zero && parsed == 0.0) {
        let bound = if allow_zero { "zero or more" } else { "greater than zero" };
        return Err(AppError::Validation(format!("{label} must be {bound}")));
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount(" 12.5 ", "Amount", true), Ok(12.5));
        assert_eq!(parse_amount("0", "Amount", true), Ok(0.0));
        assert!(parse_amount("0", "Units", false).is_err());
        assert!(parse_amount("-3", "Amount", true).is_err());
        assert!(parse_amount("abc", "Amount", true).is_err());
        assert!(parse_amount("inf", "Amount", true).is_err());
    }

    #[test]
    fn test_required_trims() {
        assert_eq!(required("  Pune ", "City"), Ok("Pune".to_string()));
        assert!(required("", "City").is_err());
    }
}
