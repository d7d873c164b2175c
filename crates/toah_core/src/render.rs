//! Text rendering of a model for the console.

use super::PuzzleState;

const STOOL_SPACING: &str = "  ";

/// Draws every stool as a column of dashed cheeses over an `=` base.
///
/// Each column is `2 * largest + 1` characters wide, and a cheese of size
/// `s` is `2 * s - 1` dashes centred in it. Rows run from the highest
/// possible stack down to the bottom.
pub fn render(model: &PuzzleState) -> String {
    let max_size = model
        .pegs()
        .iter()
        .flatten()
        .map(|cheese| cheese.size() as usize)
        .max()
        .unwrap_or(0);
    let width = 2 * max_size + 1;

    let mut lines = String::new();
    for height in (0..model.cheese_count()).rev() {
        for peg in 0..model.peg_count() {
            match model.cheese_at(peg, height) {
                Some(cheese) => {
                    let dashes = 2 * cheese.size() as usize - 1;
                    let filler = " ".repeat((width - dashes) / 2);
                    lines.push_str(&filler);
                    lines.push_str(&"-".repeat(dashes));
                    lines.push_str(&filler);
                }
                None => lines.push_str(&" ".repeat(width)),
            }
            lines.push_str(STOOL_SPACING);
        }
        lines.push('\n');
    }

    let base = "=".repeat(width);
    for _ in 0..model.peg_count() {
        lines.push_str(&base);
        lines.push_str(STOOL_SPACING);
    }
    lines
}

impl std::fmt::Display for PuzzleState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&render(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_model_is_bases_only() {
        let model = PuzzleState::new(3).unwrap();
        assert_eq!(render(&model), "=  =  =  ");
    }

    #[test]
    fn test_two_cheeses() {
        let mut model = PuzzleState::new(2).unwrap();
        model.fill_first_peg(2).unwrap();
        let blank = "       ";
        let expected = [
            format!("  -    {blank}"),
            format!(" ---   {blank}"),
            "=====  =====  ".to_string(),
        ]
        .join("\n");
        assert_eq!(render(&model), expected);
    }

    #[test]
    fn test_display_matches_render() {
        let mut model = PuzzleState::new(4).unwrap();
        model.fill_first_peg(3).unwrap();
        model.move_cheese(0, 3).unwrap();
        assert_eq!(model.to_string(), render(&model));
    }
}
