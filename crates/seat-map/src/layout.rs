//! Seat layout generation.
//!
//! Turns cabin geometry into the full seat inventory. Every attribute is a
//! pure function of row, column and the layout dimensions:
//! - window: first or last column
//! - aisle: the two columns either side of the centre split
//!   (indices `n/2 - 1` and `n/2`)
//! - exit row: rows 1 and 2 plus the last two rows (every row when the
//!   cabin has fewer than four)
//! - extra legroom: row 1 only
//!
//! No randomness. Generating the same layout twice yields identical seats.

use crate::error::{InvalidInput, Result};
use crate::types::*;

impl SeatLayout {
    /// Smallest row width the window/aisle/adjacency rules support
    pub const MIN_SEATS_PER_ROW: u8 = 2;

    /// One column letter per seat, 'A' through 'Z'
    pub const MAX_SEATS_PER_ROW: u8 = 26;

    /// Create a validated layout
    pub fn new(rows: RowNumber, seats_per_row: u8) -> Result<Self> {
        let invalid = |reason: &str| InvalidInput::InvalidLayout {
            rows,
            seats_per_row,
            reason: reason.to_string(),
        };

        if rows == 0 {
            return Err(invalid("at least one row is required").into());
        }
        if seats_per_row < Self::MIN_SEATS_PER_ROW {
            return Err(invalid("at least two seats per row are required").into());
        }
        if seats_per_row > Self::MAX_SEATS_PER_ROW {
            return Err(invalid("at most 26 seats per row are supported").into());
        }

        Ok(Self {
            rows,
            seats_per_row,
        })
    }

    pub fn rows(&self) -> RowNumber {
        self.rows
    }

    pub fn seats_per_row(&self) -> u8 {
        self.seats_per_row
    }

    /// Total number of seats in the cabin
    pub fn seat_count(&self) -> usize {
        self.rows as usize * self.seats_per_row as usize
    }

    pub fn is_window_column(&self, column: ColumnIndex) -> bool {
        column == 0 || column == self.seats_per_row - 1
    }

    /// Columns either side of the centre split.
    ///
    /// For odd widths the split falls after column `n/2 - 1`, so a 3-3 cabin
    /// has its aisle between C and D, and a 2-3 cabin between B and C.
    pub fn is_aisle_column(&self, column: ColumnIndex) -> bool {
        let split = self.seats_per_row / 2;
        column == split - 1 || column == split
    }

    /// Whether two neighbouring columns sit on opposite sides of the aisle
    pub fn crosses_aisle(&self, left: ColumnIndex, right: ColumnIndex) -> bool {
        let split = self.seats_per_row / 2;
        left < split && right >= split
    }

    pub fn is_exit_row(&self, row: RowNumber) -> bool {
        row <= 2 || row >= self.rows.saturating_sub(1)
    }

    pub fn has_extra_legroom(&self, row: RowNumber) -> bool {
        row == 1
    }

    /// Whether the seat id falls inside this layout
    pub fn contains(&self, id: &SeatId) -> bool {
        id.row >= 1 && id.row <= self.rows && id.column < self.seats_per_row
    }

    /// Position of a seat in the row-major seat list
    pub fn index_of(&self, id: &SeatId) -> Option<usize> {
        if !self.contains(id) {
            return None;
        }
        Some((id.row as usize - 1) * self.seats_per_row as usize + id.column as usize)
    }

    /// Build the full seat inventory in row-major order.
    ///
    /// Booked, recommended and score fields start out cleared.
    pub fn generate_seats(&self) -> Vec<Seat> {
        let mut seats = Vec::with_capacity(self.seat_count());

        for row in 1..=self.rows {
            for column in 0..self.seats_per_row {
                let mut seat = Seat::new(SeatId::new(row, column));
                seat.is_window = self.is_window_column(column);
                seat.is_aisle = self.is_aisle_column(column);
                seat.is_exit_row = self.is_exit_row(row);
                seat.has_extra_legroom = self.has_extra_legroom(row);
                seats.push(seat);
            }
        }

        seats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generates_rows_times_width_unique_seats() {
        for (rows, width) in [(1, 2), (2, 6), (7, 4), (30, 9), (3, 26)] {
            let layout = SeatLayout::new(rows, width).unwrap();
            let seats = layout.generate_seats();

            assert_eq!(seats.len(), rows as usize * width as usize);
            let ids: HashSet<String> = seats.iter().map(|s| s.id.to_string()).collect();
            assert_eq!(ids.len(), seats.len(), "ids must be unique for {}x{}", rows, width);
        }
    }

    #[test]
    fn test_generation_is_deterministic() {
        let layout = SeatLayout::new(18, 6).unwrap();
        assert_eq!(layout.generate_seats(), layout.generate_seats());
    }

    #[test]
    fn test_six_abreast_attributes() {
        let layout = SeatLayout::new(2, 6).unwrap();
        let seats = layout.generate_seats();

        let letters: String = seats[..6].iter().map(|s| s.id.letter()).collect();
        assert_eq!(letters, "ABCDEF");

        let windows: Vec<String> = seats
            .iter()
            .filter(|s| s.id.row == 1 && s.is_window)
            .map(|s| s.id.to_string())
            .collect();
        assert_eq!(windows, vec!["1A", "1F"]);

        let aisles: Vec<String> = seats
            .iter()
            .filter(|s| s.id.row == 1 && s.is_aisle)
            .map(|s| s.id.to_string())
            .collect();
        assert_eq!(aisles, vec!["1C", "1D"]);
    }

    #[test]
    fn test_exit_rows_are_first_two_and_last_two() {
        let layout = SeatLayout::new(10, 4).unwrap();
        let exits: Vec<RowNumber> = (1..=10).filter(|&r| layout.is_exit_row(r)).collect();
        assert_eq!(exits, vec![1, 2, 9, 10]);
    }

    #[test]
    fn test_small_cabins_are_all_exit_rows() {
        for rows in 1..4 {
            let layout = SeatLayout::new(rows, 4).unwrap();
            assert!((1..=rows).all(|r| layout.is_exit_row(r)));
        }
    }

    #[test]
    fn test_extra_legroom_only_in_first_row() {
        let layout = SeatLayout::new(5, 6).unwrap();
        for seat in layout.generate_seats() {
            assert_eq!(seat.has_extra_legroom, seat.id.row == 1);
        }
    }

    #[test]
    fn test_odd_width_aisle() {
        let layout = SeatLayout::new(1, 5).unwrap();
        let aisles: Vec<ColumnIndex> = (0..5).filter(|&c| layout.is_aisle_column(c)).collect();
        assert_eq!(aisles, vec![1, 2]);
        assert!(layout.crosses_aisle(1, 2));
        assert!(!layout.crosses_aisle(2, 3));
    }

    #[test]
    fn test_rejects_invalid_dimensions() {
        assert!(SeatLayout::new(0, 6).is_err());
        assert!(SeatLayout::new(10, 1).is_err());
        assert!(SeatLayout::new(10, 27).is_err());
    }

    #[test]
    fn test_index_of_matches_generated_order() {
        let layout = SeatLayout::new(4, 6).unwrap();
        let seats = layout.generate_seats();
        for (idx, seat) in seats.iter().enumerate() {
            assert_eq!(layout.index_of(&seat.id), Some(idx));
        }
        assert_eq!(layout.index_of(&SeatId::new(5, 0)), None);
        assert_eq!(layout.index_of(&SeatId::new(1, 6)), None);
        assert_eq!(layout.index_of(&SeatId::new(0, 0)), None);
    }
}
