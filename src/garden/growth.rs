//! Per-tick transition rules for each growth stage

use crate::canvas::{colors, Cell, Surface};
use crate::config::{Layout, BLOOM_CEILING};
use crate::dice::Dice;

use super::entity::{Entity, Heading, Kind, Side};

const SEED_GLYPH: char = '.';
const JOINT_GLYPH: char = '+';
const BLOOM_GLYPH: char = 'O';

/// Chance denominators
const LEAF_ODDS: u32 = 5;
const LEAF_END_ODDS: u32 = 3;
/// Bloom size is (distance from bottom + jitter) / BLOOM_SCALE
const BLOOM_SCALE: u32 = 12;
/// Edge roughness roll; `roll / 4 - 2` spans -2.0..=2.0
const BLOOM_JITTER_ROLLS: u32 = 17;

/// Advance one entity by one tick. New entities go into `sprouts`.
pub fn advance<S, D>(entity: &mut Entity, layout: &Layout, surface: &mut S, dice: &mut D, sprouts: &mut Vec<Entity>)
where
    S: Surface + ?Sized,
    D: Dice + ?Sized,
{
    match entity.kind {
        Kind::Seed { saved } => fall(entity, saved, layout, surface),
        Kind::Stem { heading } => climb(entity, heading, surface, dice, sprouts),
        Kind::Leaf { side: None } => unfurl(entity, surface, dice),
        Kind::Leaf { side: Some(side) } => spread(entity, side, surface, dice),
        Kind::Bloom => blossom(entity, layout, surface, dice),
        Kind::Dead => {}
    }
}

fn fall<S: Surface + ?Sized>(entity: &mut Entity, saved: Option<Cell>, layout: &Layout, surface: &mut S) {
    let (row, col) = (entity.row, entity.col);

    if let Some(cell) = saved {
        surface.write_cell(row - 1, col, cell);
    }

    let under = surface.read_cell(row, col);
    surface.write_cell(row, col, Cell::new(SEED_GLYPH, colors::SEED, true));

    if row >= layout.floor_row() {
        entity.kind = Kind::Stem { heading: Heading::Straight };
    } else {
        entity.kind = Kind::Seed { saved: Some(under) };
        entity.row = row + 1;
    }
}

/// Roll the stem's next heading: the current one is kept 3 times in 5,
/// each of the other two 1 time in 5.
fn next_heading<D: Dice + ?Sized>(heading: Heading, dice: &mut D) -> Heading {
    let offset = (dice.below(5) as i32 + 2) / 3 - 1;
    heading.steer(offset)
}

fn climb<S, D>(entity: &mut Entity, heading: Heading, surface: &mut S, dice: &mut D, sprouts: &mut Vec<Entity>)
where
    S: Surface + ?Sized,
    D: Dice + ?Sized,
{
    let (row, col) = (entity.row, entity.col);
    let heading = next_heading(heading, dice);

    surface.write_cell(row, col, Cell::new(heading.glyph(), colors::STEM, false));

    if dice.below(LEAF_ODDS) == 0 {
        sprouts.push(Entity::leaf(row, col));
    }

    entity.row = row - 1;
    entity.col = col + heading.dx();

    // Higher stems are more likely to bloom; certain near the top.
    let odds = (row - BLOOM_CEILING).max(1) as u32;
    entity.kind = if dice.below(odds) == 0 {
        Kind::Bloom
    } else {
        Kind::Stem { heading }
    };
}

fn unfurl<S, D>(entity: &mut Entity, surface: &mut S, dice: &mut D)
where
    S: Surface + ?Sized,
    D: Dice + ?Sized,
{
    surface.write_cell(entity.row, entity.col, Cell::new(JOINT_GLYPH, colors::LEAF, true));

    let side = if dice.below(2) == 0 { Side::Left } else { Side::Right };
    entity.col += side.dx();
    entity.kind = Kind::Leaf { side: Some(side) };
}

fn spread<S, D>(entity: &mut Entity, side: Side, surface: &mut S, dice: &mut D)
where
    S: Surface + ?Sized,
    D: Dice + ?Sized,
{
    let dy = dice.below(2) as i32 - 1;
    let glyph = match (dy, side) {
        (0, _) => '-',
        (_, Side::Left) => '\\',
        (_, Side::Right) => '/',
    };
    surface.write_cell(entity.row, entity.col, Cell::new(glyph, colors::LEAF, true));

    entity.col += side.dx();
    entity.row += dy;

    if dice.below(LEAF_END_ODDS) == 0 {
        entity.kind = Kind::Dead;
    }
}

fn blossom<S, D>(entity: &mut Entity, layout: &Layout, surface: &mut S, dice: &mut D)
where
    S: Surface + ?Sized,
    D: Dice + ?Sized,
{
    let (row, col) = (entity.row, entity.col);

    let color = colors::BLOOMS[dice.below(colors::BLOOMS.len() as u32) as usize];
    let size = (layout.rows - row + dice.below(BLOOM_SCALE) as i32) as f32 / BLOOM_SCALE as f32;
    let bold = dice.below(2) == 1;
    let petal = Cell::new(BLOOM_GLYPH, color, bold);

    let reach = size as i32;
    for i in -reach..=reach {
        for j in -reach..=reach {
            let jitter = dice.below(BLOOM_JITTER_ROLLS) as f32 / 4.0 - 2.0;
            if ((i * i + j * j) as f32) < size * size + jitter {
                surface.write_cell(row + i, col + j, petal);
            }
        }
    }
    surface.write_cell(row, col, Cell::new(BLOOM_GLYPH, colors::BLOOM_CENTER, true));

    entity.kind = Kind::Dead;
}
