//! Reason template rendering.

use super::types::Observation;

/// Substitutes `{value}` and `{limit}` in a reason template.
pub fn render(template: &str, observation: &Observation) -> String {
    if !template.contains('{') {
        return template.to_string();
    }
    template
        .replace("{value}", &observation.value)
        .replace("{limit}", &observation.limit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_both_placeholders() {
        let obs = Observation {
            value: "85".to_string(),
            limit: "80".to_string(),
        };
        assert_eq!(
            render("temperature {value}°C at or above {limit}°C", &obs),
            "temperature 85°C at or above 80°C"
        );
    }

    #[test]
    fn plain_template_is_copied() {
        let obs = Observation::default();
        assert_eq!(render("fan stopped", &obs), "fan stopped");
    }
}
