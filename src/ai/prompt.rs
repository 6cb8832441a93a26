pub struct PromptBuilder;

impl Default for PromptBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PromptBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Renders the numbers, in the order given, into the sorting instruction.
    pub fn build_prompt(&self, numbers: &[f64]) -> String {
        let numbers_str = Self::join_numbers(numbers);

        format!(
            "Sort the following list of numbers and return ONLY the sorted list in bracket \
             notation like this: [num1, num2, num3]. Do not add any other text. \
             Here is the list: [{numbers_str}]"
        )
    }

    pub fn join_numbers(numbers: &[f64]) -> String {
        numbers
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
