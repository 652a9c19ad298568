use log::trace;

/// How a simulated link mistreats the payloads sent over it
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinkConditions {
    /// Chance in `[0, 1]` that a payload is dropped
    pub loss: f32,
    /// Chance in `[0, 1]` that a delivered payload arrives twice
    pub duplication: f32,
    /// Whether payloads of one delivery round arrive shuffled
    pub reorder: bool,
}

impl LinkConditions {
    pub fn perfect() -> Self {
        Self {
            loss: 0.0,
            duplication: 0.0,
            reorder: false,
        }
    }

    /// Never loses or reorders, but redelivers often
    pub fn duplicating() -> Self {
        Self {
            duplication: 0.5,
            ..Self::perfect()
        }
    }

    pub fn poor() -> Self {
        Self {
            loss: 0.25,
            duplication: 0.25,
            reorder: true,
        }
    }
}

impl Default for LinkConditions {
    fn default() -> Self {
        Self::perfect()
    }
}

/// A seeded, deterministic unreliable link carrying serialized diffs one way
pub struct LossyLink {
    conditions: LinkConditions,
    rng: fastrand::Rng,
    in_flight: Vec<Vec<u8>>,
    dropped: usize,
}

impl LossyLink {
    pub fn new(conditions: LinkConditions, seed: u64) -> Self {
        Self {
            conditions,
            rng: fastrand::Rng::with_seed(seed),
            in_flight: Vec::new(),
            dropped: 0,
        }
    }

    pub fn perfect() -> Self {
        Self::new(LinkConditions::perfect(), 0)
    }

    pub fn send(&mut self, payload: Vec<u8>) {
        if self.rng.f32() < self.conditions.loss {
            trace!("LossyLink: dropped payload of {} bytes", payload.len());
            self.dropped += 1;
            return;
        }
        if self.rng.f32() < self.conditions.duplication {
            self.in_flight.push(payload.clone());
        }
        self.in_flight.push(payload);
    }

    /// Everything in flight, in arrival order
    pub fn deliver(&mut self) -> Vec<Vec<u8>> {
        let mut arrived = std::mem::take(&mut self.in_flight);
        if self.conditions.reorder {
            self.rng.shuffle(&mut arrived);
        }
        arrived
    }

    pub fn dropped(&self) -> usize {
        self.dropped
    }
}
