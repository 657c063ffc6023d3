use crate::sbom_generation::domain::{LicenseCatalog, LicenseClassification, NOASSERTION};

const NONE: &str = "NONE";

/// LicenseExpressionPolicy decides whether a declared license string is
/// expressible with identifiers from the catalog.
///
/// The check is a deliberately shallow reading of SPDX expression syntax:
/// 1. `NONE` and `NOASSERTION` (and the empty string, read as
///    `NOASSERTION`) are always recognized
/// 2. one pair of parentheses wrapping the whole string is removed
/// 3. `+` operators are dropped
/// 4. the rest is split on ` AND `, then on ` OR `, and every piece must
///    be a catalog identifier
///
/// Operators are matched case-sensitively with single spaces. Lowercase
/// operators, nested parentheses and `WITH` clauses are not understood, so
/// such expressions come out unrecognized.
pub struct LicenseExpressionPolicy;

impl LicenseExpressionPolicy {
    pub fn classify(raw: &str, catalog: &LicenseCatalog) -> LicenseClassification {
        if Self::is_always_valid(raw) {
            return LicenseClassification::Recognized;
        }

        let expression = Self::strip_outer_parens(raw).replace('+', "");

        let all_known = expression
            .split(" AND ")
            .flat_map(|conjunct| conjunct.split(" OR "))
            .all(|id| catalog.contains(id));

        if all_known {
            LicenseClassification::Recognized
        } else {
            LicenseClassification::Unrecognized
        }
    }

    fn is_always_valid(raw: &str) -> bool {
        raw.is_empty() || raw == NONE || raw == NOASSERTION
    }

    /// Removes parentheses only when the string holds exactly one of each
    /// and they sit at the very start and end.
    fn strip_outer_parens(raw: &str) -> &str {
        let single_pair = raw.matches('(').count() == 1 && raw.matches(')').count() == 1;
        if !single_pair {
            return raw;
        }
        raw.strip_prefix('(')
            .and_then(|s| s.strip_suffix(')'))
            .unwrap_or(raw)
    }
}
