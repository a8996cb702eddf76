/// Format a cost in dollars as a display string ("$0.0031", "$1.25").
/// LLM call costs are routinely sub-cent, so up to six decimal places are
/// kept before trailing zeros are trimmed.
pub fn format_cost(amount: f64) -> String {
    let fixed = format!("{:.6}", amount);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    format!("${}", trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_cost_sub_cent() {
        assert_eq!(format_cost(0.0031), "$0.0031");
    }

    #[test]
    fn test_format_cost_whole_dollars() {
        assert_eq!(format_cost(1.0), "$1");
    }

    #[test]
    fn test_format_cost_trims_trailing_zeros() {
        assert_eq!(format_cost(0.25), "$0.25");
        assert_eq!(format_cost(12.500000), "$12.5");
    }

    #[test]
    fn test_format_cost_zero() {
        assert_eq!(format_cost(0.0), "$0");
    }
}
