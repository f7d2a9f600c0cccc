use super::{Board, Coord, BOARD_SIZE};
use std::fmt;

const FILE_ROW: &str = "    a b c d e f g h i j k l m n o";

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let file = (b'a' + self.col()) as char;
        let rank = BOARD_SIZE as u8 - self.row();
        write!(f, "{}{}", file, rank)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut board_str = String::new();
        board_str.push_str(FILE_ROW);
        board_str.push('\n');
        for row in 0..BOARD_SIZE as u8 {
            let rank = BOARD_SIZE as u8 - row;
            board_str.push_str(&format!("{:>2} ", rank));
            for col in 0..BOARD_SIZE as u8 {
                let cell_char = match self.get(Coord::new(row, col)) {
                    Some(color) => color.to_char(),
                    None => '.',
                };
                board_str.push(' ');
                board_str.push(cell_char);
            }
            board_str.push_str(&format!("  {}\n", rank));
        }
        board_str.push_str(FILE_ROW);
        board_str.push('\n');
        write!(f, "{}", board_str)
    }
}

#[macro_export]
macro_rules! gomoku_position {
    ($($cell:tt)*) => {{
        let mut board = Board::new();
        // Convert all input tokens to a string and filter out whitespace characters.
        let cells: Vec<_> = stringify!($($cell)*)
            .chars()
            .filter(|&c| !c.is_whitespace())
            .collect();
        // Ensure we have exactly 225 cells
        assert_eq!(cells.len(), 225, "Invalid number of cells. Expected 225, got {}", cells.len());
        // Iterate over the characters and set up the board. The macro input
        // reads top row first, matching the board's row order.
        for (i, &c) in cells.iter().enumerate() {
            if c != '.' {
                let color = match c {
                    'x' => Color::Black,
                    'o' => Color::White,
                    _ => panic!("Invalid character in gomoku position"),
                };
                let row = (i / 15) as u8;
                let col = (i % 15) as u8;
                board.put($crate::board::Coord::new(row, col), color).unwrap();
            }
        }
        board
    }};
}

#[cfg(test)]
mod tests {
    use super::super::color::Color;
    use super::*;
    use crate::gomoku_position;

    #[test]
    fn test_coord_display() {
        assert_eq!(Coord::new(7, 7).to_string(), "h8");
        assert_eq!(Coord::new(0, 0).to_string(), "a15");
        assert_eq!(Coord::new(14, 14).to_string(), "o1");
        assert_eq!(Coord::new(14, 0).to_string(), "a1");
    }

    #[test]
    fn test_gomoku_position_macro() {
        let board = gomoku_position! {
            ...............
            ...............
            ...............
            ...............
            ...............
            ...............
            ...............
            .......xo......
            ...............
            ...............
            ...............
            ...............
            ...............
            ...............
            x..............
        };

        assert_eq!(board.get(Coord::new(7, 7)), Some(Color::Black));
        assert_eq!(board.get(Coord::new(7, 8)), Some(Color::White));
        assert_eq!(board.get(Coord::new(14, 0)), Some(Color::Black));
        assert_eq!(board.stone_count(), 3);
    }

    #[test]
    fn test_display_shows_stones() {
        let board = gomoku_position! {
            ...............
            ...............
            ...............
            ...............
            ...............
            ...............
            ...............
            .......x.......
            ...............
            ...............
            ...............
            ...............
            ...............
            ...............
            ...............
        };

        let rendered = board.to_string();
        assert!(rendered.contains('x'));
        assert!(rendered.contains(" 8 "));
        assert!(rendered.starts_with(FILE_ROW));
    }
}
