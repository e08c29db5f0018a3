//! Profile field domain model

/// A single labeled line on the profile screen, e.g. `("Age:", "19")`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileField {
    pub label: String,
    pub value: String,
}

impl ProfileField {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

impl<L: Into<String>, V: Into<String>> From<(L, V)> for ProfileField {
    fn from((label, value): (L, V)) -> Self {
        Self::new(label, value)
    }
}
