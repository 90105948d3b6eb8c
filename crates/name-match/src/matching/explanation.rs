use super::comparison::ComparisonResult;

impl ComparisonResult {
    /// Human-readable account of which rules fired and what kind of difference
    /// remains, one sentence per line.
    pub fn explanation(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(3);

        if self.normalization_applied.is_empty() {
            lines.push("Normalization left both names unchanged.".to_string());
        } else {
            let labels = self
                .normalization_applied
                .iter()
                .map(|rule| rule.label())
                .collect::<Vec<_>>()
                .join(", ");
            lines.push(format!("Normalization applied: {labels}."));
        }

        if self.name1 == self.name2 {
            lines.push("The names are identical.".to_string());
            return lines;
        }

        if self.normalized_names_match() {
            lines.push(format!(
                "Both names normalize to \"{}\" (score {:.3}).",
                self.normalized_name1, self.score
            ));
        } else {
            lines.push(format!(
                "Normalized names \"{}\" and \"{}\" still differ (score {:.3}).",
                self.normalized_name1, self.normalized_name2, self.score
            ));
        }

        if self.difference_categories.is_empty() {
            lines.push(
                "No difference category applies; normalization removes the difference entirely."
                    .to_string(),
            );
        } else {
            let labels = self
                .difference_categories
                .iter()
                .map(|category| category.label())
                .collect::<Vec<_>>()
                .join(", ");
            lines.push(format!("Difference categories: {labels}."));
        }

        lines
    }
}
