use itertools::Itertools;
use maud::{html, Markup};

pub fn headers() -> Markup {
    html! {
        meta name="viewport" content="width=device-width, initial-scale=1";
        meta charset="UTF-8";
        link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/bulma@0.9.3/css/bulma.min.css" crossorigin="anonymous" referrerpolicy="no-referrer";
    }
}

pub fn footer() -> Markup {
    html! {
        footer.footer {
            div.container {
                p.has-text-centered {
                    "Fitted with ordinary least squares over the loaded sales. "
                    "Prices are estimates, not appraisals."
                }
            }
        }
    }
}

/// Bounded numeric input. The bounds document the supported domain and are
/// enforced by the form control only: the model itself never validates
/// ranges and extrapolates out-of-domain values unclamped.
pub fn number_field(name: &str, label: &str, value: f64, min: i32, max: i32) -> Markup {
    html! {
        div.field {
            label.label for=(name) { (label) }
            div.control {
                input.input
                    type="number"
                    id=(name)
                    name=(name)
                    value=(value)
                    min=(min)
                    max=(max)
                    step="1"
                    required;
            }
        }
    }
}

/// Formats the estimated price as whole currency units, e.g. `$123,457`.
#[must_use]
pub fn format_dollars(value: f64) -> String {
    let rounded = value.round() as i64;
    let digits = rounded.abs().to_string();
    let grouped = digits
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|group| std::str::from_utf8(group).expect("digits are ASCII"))
        .join(",");
    if rounded < 0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_dollars_ok() {
        assert_eq!(format_dollars(123_456.7), "$123,457");
        assert_eq!(format_dollars(999.5), "$1,000");
        assert_eq!(format_dollars(42.0), "$42");
        assert_eq!(format_dollars(-1_234.4), "-$1,234");
    }
}
