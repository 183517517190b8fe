use rand::rngs::StdRng;
use rand::Rng;

/// Source of uniform rolls for the growth rules
pub trait Dice {
    /// Roll a value in `0..n`. `n` must be positive.
    fn below(&mut self, n: u32) -> u32;
}

impl Dice for StdRng {
    fn below(&mut self, n: u32) -> u32 {
        self.gen_range(0..n)
    }
}

/// Replays a fixed list of rolls, panicking when it runs dry or a roll is out of range
#[cfg(test)]
pub struct ScriptedDice {
    script: std::collections::VecDeque<u32>,
}

#[cfg(test)]
impl ScriptedDice {
    pub fn new(rolls: &[u32]) -> Self {
        Self {
            script: rolls.iter().copied().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

#[cfg(test)]
impl Dice for ScriptedDice {
    fn below(&mut self, n: u32) -> u32 {
        let roll = self.script.pop_front().expect("dice script ran out");
        assert!(roll < n, "scripted roll {} out of range 0..{}", roll, n);
        roll
    }
}

/// Answers every roll from a closure of the range size
#[cfg(test)]
pub struct FixedDice<F: FnMut(u32) -> u32>(pub F);

#[cfg(test)]
impl<F: FnMut(u32) -> u32> Dice for FixedDice<F> {
    fn below(&mut self, n: u32) -> u32 {
        let roll = (self.0)(n);
        assert!(roll < n, "fixed roll {} out of range 0..{}", roll, n);
        roll
    }
}
