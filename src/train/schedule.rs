/// Chooses which iterations of a run are written to the CSV log.
///
/// `samples` indices are spread evenly over `0..iterations`; the first is
/// always `0` (when more than one sample is requested) and the last is always
/// `iterations - 1`. Requesting more samples than iterations logs every one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleSchedule {
    indices: Vec<usize>,
}

impl SampleSchedule {
    pub fn new(iterations: usize, samples: usize) -> SampleSchedule {
        let indices = if iterations == 0 || samples == 0 {
            Vec::new()
        } else if samples == 1 {
            vec![iterations - 1]
        } else if samples >= iterations {
            (0..iterations).collect()
        } else {
            // Step (N-1)/(K-1) >= 1 here, so the indices are strictly increasing.
            let span = (iterations - 1) as u128;
            let gaps = (samples - 1) as u128;
            (0..samples)
                .map(|k| (k as u128 * span / gaps) as usize)
                .collect()
        };
        SampleSchedule { indices }
    }

    pub fn contains(&self, training_index: usize) -> bool {
        self.indices.binary_search(&training_index).is_ok()
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}
