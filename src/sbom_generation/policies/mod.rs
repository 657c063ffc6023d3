mod license_expression;

pub use license_expression::LicenseExpressionPolicy;
