//! Request validation for the HTTP adapter.
//!
//! Bodies and query strings are first deserialized into shapes where every
//! field is optional, so that a missing field surfaces as a field error in
//! the response instead of an opaque deserialization failure.

use serde::Deserialize;
use thiserror::Error;

use super::ApiConfig;
use crate::widget::{WidgetAreaFilter, WidgetRequest};

/// One or more request fields failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Request contains invalid parameters or body")]
pub struct ValidationError {
    /// Human readable message per offending field
    pub errors: Vec<String>,
}

impl ValidationError {
    fn check(errors: Vec<String>) -> Result<(), Self> {
        if errors.is_empty() {
            Ok(())
        } else {
            Err(Self { errors })
        }
    }
}

/// Widget body as sent by a client, before validation.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct WidgetBody {
    pub x: Option<i64>,
    pub y: Option<i64>,
    pub z: Option<i64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
}

impl WidgetBody {
    /// Checks required fields and positive extents.
    pub fn validate(self) -> Result<WidgetRequest, ValidationError> {
        let mut errors = Vec::new();
        let x = required("x", self.x, &mut errors);
        let y = required("y", self.y, &mut errors);
        let width = positive("width", self.width, &mut errors);
        let height = positive("height", self.height, &mut errors);

        match (x, y, width, height) {
            (Some(x), Some(y), Some(width), Some(height)) => Ok(WidgetRequest {
                x,
                y,
                z: self.z,
                width,
                height,
            }),
            _ => Err(ValidationError { errors }),
        }
    }
}

fn required<T>(field: &str, value: Option<T>, errors: &mut Vec<String>) -> Option<T> {
    if value.is_none() {
        errors.push(format!("{field} must not be null"));
    }
    value
}

fn positive(field: &str, value: Option<f64>, errors: &mut Vec<String>) -> Option<f64> {
    match required(field, value, errors) {
        Some(v) if v > 0.0 && v.is_finite() => Some(v),
        Some(_) => {
            errors.push(format!("{field} must be greater than 0"));
            None
        }
        None => None,
    }
}

/// Query string of `GET /widgets`.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub left_x: Option<i64>,
    pub right_x: Option<i64>,
    pub lower_y: Option<i64>,
    pub higher_y: Option<i64>,
}

/// A validated listing request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListRequest {
    pub page: usize,
    pub size: usize,
    pub filter: WidgetAreaFilter,
}

impl ListQuery {
    /// Applies defaults from `config` and range-checks paging.
    pub fn validate(self, config: &ApiConfig) -> Result<ListRequest, ValidationError> {
        let mut errors = Vec::new();

        let page = match usize::try_from(self.page.unwrap_or(0)) {
            Ok(page) => page,
            Err(_) => {
                errors.push("page must be greater than or equal to 0".to_string());
                0
            }
        };

        let size = self
            .size
            .map_or(Ok(config.default_page_size), usize::try_from)
            .unwrap_or(0);
        if size == 0 {
            errors.push("size must be greater than 0".to_string());
        } else if size > config.max_page_size {
            errors.push(format!(
                "size must be less than or equal to {}",
                config.max_page_size
            ));
        }

        ValidationError::check(errors)?;
        Ok(ListRequest {
            page,
            size,
            filter: WidgetAreaFilter {
                left_x: self.left_x,
                right_x: self.right_x,
                lower_y: self.lower_y,
                higher_y: self.higher_y,
            },
        })
    }
}
