/// Snapshot of one completed step
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StepStats {
    /// Rules invoked during the step
    pub updated: u32,
    /// Particles on the grid after the step
    pub particle_count: u32,
    pub step_ms: f64,
}
