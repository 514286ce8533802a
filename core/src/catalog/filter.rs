// storefront_core/src/catalog/filter.rs

//! Product filtering. Every criterion is optional; set criteria combine with AND.

use crate::catalog::model::{CategoryId, Product};
use rust_decimal::Decimal;
use std::str::FromStr;
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
  pub category_id: Option<CategoryId>,
  /// Stored lowercased. Matched as a substring of the lowercased name.
  keyword: Option<String>,
  pub min_price: Option<Decimal>,
  pub max_price: Option<Decimal>,
}

impl ProductFilter {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn category(mut self, category_id: CategoryId) -> Self {
    self.category_id = Some(category_id);
    self
  }

  /// A blank keyword clears the keyword criterion.
  pub fn keyword(mut self, keyword: &str) -> Self {
    let trimmed = keyword.trim();
    self.keyword = (!trimmed.is_empty()).then(|| trimmed.to_lowercase());
    self
  }

  pub fn min_price(mut self, min: Decimal) -> Self {
    self.min_price = Some(min);
    self
  }

  pub fn max_price(mut self, max: Decimal) -> Self {
    self.max_price = Some(max);
    self
  }

  pub fn keyword_value(&self) -> Option<&str> {
    self.keyword.as_deref()
  }

  /// Builds a filter from raw request parameters.
  ///
  /// Values that do not parse are dropped, not rejected: `from_price=abc`
  /// behaves as if no lower bound was given.
  pub fn from_params(
    category_id: Option<&str>,
    keyword: Option<&str>,
    from_price: Option<&str>,
    to_price: Option<&str>,
  ) -> Self {
    let mut filter = Self::new();
    filter.category_id = category_id.and_then(|raw| parse_lenient::<CategoryId>("category_id", raw));
    if let Some(kw) = keyword {
      filter = filter.keyword(kw);
    }
    filter.min_price = from_price.and_then(|raw| parse_lenient::<Decimal>("from_price", raw));
    filter.max_price = to_price.and_then(|raw| parse_lenient::<Decimal>("to_price", raw));
    filter
  }

  pub fn is_unrestricted(&self) -> bool {
    self.category_id.is_none() && self.keyword.is_none() && self.min_price.is_none() && self.max_price.is_none()
  }

  pub fn matches(&self, product: &Product) -> bool {
    if let Some(category_id) = self.category_id {
      if product.category_id != category_id {
        return false;
      }
    }
    if let Some(keyword) = &self.keyword {
      if !product.name.to_lowercase().contains(keyword.as_str()) {
        return false;
      }
    }
    if let Some(min) = self.min_price {
      if product.price < min {
        return false;
      }
    }
    if let Some(max) = self.max_price {
      if product.price > max {
        return false;
      }
    }
    true
  }
}

fn parse_lenient<T: FromStr>(param: &str, raw: &str) -> Option<T> {
  let trimmed = raw.trim();
  if trimmed.is_empty() {
    return None;
  }
  match trimmed.parse::<T>() {
    Ok(value) => Some(value),
    Err(_) => {
      debug!(param, raw, "Ignoring unparseable filter parameter.");
      None
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn product(name: &str, price: &str, category_id: CategoryId) -> Product {
    Product {
      id: 1,
      name: name.to_string(),
      price: Decimal::from_str(price).unwrap(),
      category_id,
      description: None,
      image: None,
    }
  }

  #[test]
  fn blank_keyword_is_no_keyword() {
    let filter = ProductFilter::new().keyword("   ");
    assert!(filter.keyword_value().is_none());
    assert!(filter.is_unrestricted());
  }

  #[test]
  fn unparseable_bounds_are_ignored() {
    let filter = ProductFilter::from_params(Some("two"), None, Some("abc"), Some("12.5x"));
    assert!(filter.is_unrestricted());
  }

  #[test]
  fn price_bounds_are_inclusive() {
    let p = product("Kettle", "20.00", 1);
    let filter = ProductFilter::from_params(None, None, Some("20"), Some("20.00"));
    assert!(filter.matches(&p));
    let filter = ProductFilter::from_params(None, None, Some("20.01"), None);
    assert!(!filter.matches(&p));
  }

  #[test]
  fn keyword_ignores_case() {
    let p = product("Stainless Kettle", "20.00", 1);
    assert!(ProductFilter::new().keyword("KETT").matches(&p));
    assert!(!ProductFilter::new().keyword("toaster").matches(&p));
  }
}
