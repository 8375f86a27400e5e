use std::collections::HashMap;

/// Fixed categorical palette (the classic 20-color d3 scheme).
const COLORS: &[&str] = &[
	"#1f77b4", "#aec7e8", "#ff7f0e", "#ffbb78", "#2ca02c", "#98df8a", "#d62728", "#ff9896",
	"#9467bd", "#c5b0d5", "#8c564b", "#c49c94", "#e377c2", "#f7b6d2", "#7f7f7f", "#c7c7c7",
	"#bcbd22", "#dbdb8d", "#17becf", "#9edae5",
];

/// Ordinal color scale: palette slots are handed out to names in
/// first-seen order, cycling once the palette runs out. Same name, same
/// color, for the lifetime of the scale.
#[derive(Debug, Default)]
pub struct CategoryPalette {
	assigned: HashMap<String, usize>,
}

impl CategoryPalette {
	/// Empty scale with no names assigned yet.
	pub fn new() -> Self {
		Self::default()
	}

	/// Color for `name`, assigning the next free slot on first sight.
	pub fn color_of(&mut self, name: &str) -> &'static str {
		let next = self.assigned.len();
		let slot = *self.assigned.entry(name.to_owned()).or_insert(next);
		COLORS[slot % COLORS.len()]
	}
}
