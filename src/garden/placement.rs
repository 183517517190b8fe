//! Admitting new seeds into the box

use crate::dice::Dice;
use tracing::debug;

use super::entity::Entity;
use super::Garden;

impl Garden {
    /// Drop a seed at (row, col) if it lies inside the walls and above the floor.
    /// Returns whether the seed was planted; a rejected spot changes nothing.
    pub fn try_place_seed(&mut self, row: i32, col: i32) -> bool {
        if !self.layout.admits(row, col) {
            debug!(row, col, "seed rejected outside the growable interior");
            return false;
        }
        self.registry.append(Entity::seed(row, col));
        true
    }

    /// Drop seeds across the top of the box, each column with even odds.
    /// Returns how many were planted.
    pub fn plant_row<D: Dice + ?Sized>(&mut self, dice: &mut D) -> usize {
        let row = self.layout.planting_row();
        let mut planted = 0;
        for col in self.layout.interior_cols() {
            if dice.below(2) == 1 && self.try_place_seed(row, col) {
                planted += 1;
            }
        }
        debug!(planted, "planted a row of seeds");
        planted
    }
}

#[cfg(test)]
mod tests {
    use crate::config::Layout;
    use crate::dice::FixedDice;
    use crate::garden::entity::Kind;
    use crate::garden::Garden;

    fn garden() -> Garden {
        Garden::new(Layout::new(40, 24, 7, 3).unwrap())
    }

    #[test]
    fn accepts_the_interior() {
        let mut garden = garden();
        assert!(garden.try_place_seed(0, 8));
        assert!(garden.try_place_seed(16, 32));
        assert_eq!(garden.live_entity_count(), 2);
        assert!(garden
            .entities()
            .all(|e| matches!(e.kind, Kind::Seed { saved: None })));
    }

    #[test]
    fn rejects_the_margin_columns_exactly() {
        let mut garden = garden();
        assert!(!garden.try_place_seed(5, 7));
        assert!(!garden.try_place_seed(5, 33));
        assert!(garden.try_place_seed(5, 8));
        assert!(garden.try_place_seed(5, 32));
        assert_eq!(garden.live_entity_count(), 2);
    }

    #[test]
    fn rejects_rows_on_or_below_the_floor() {
        let mut garden = garden();
        let floor = garden.layout().floor_row();
        assert!(!garden.try_place_seed(floor, 20));
        assert!(!garden.try_place_seed(floor + 1, 20));
        assert!(!garden.try_place_seed(-1, 20));
        assert!(garden.try_place_seed(floor - 1, 20));
        assert_eq!(garden.live_entity_count(), 1);
    }

    #[test]
    fn plant_row_covers_every_column_on_heads() {
        let mut garden = garden();
        let planted = garden.plant_row(&mut FixedDice(|_| 1));
        assert_eq!(planted, 25);
        assert_eq!(garden.live_entity_count(), 25);
        let cols: Vec<i32> = garden.entities().map(|e| e.col).collect();
        assert_eq!(cols, (8..33).collect::<Vec<_>>());
        assert!(garden.entities().all(|e| e.row == 0));
    }

    #[test]
    fn plant_row_skips_columns_on_tails() {
        let mut garden = garden();
        let mut flip = false;
        let planted = garden.plant_row(&mut FixedDice(move |_| {
            flip = !flip;
            flip as u32
        }));
        assert_eq!(planted, 13);
        assert!(garden.entities().all(|e| e.col % 2 == 0));
    }
}
