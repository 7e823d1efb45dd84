pub mod constant {
    pub const N_ANTS: usize = 5;
    pub const N_BEST: usize = 2;
    pub const N_ITERATIONS: usize = 100;
    pub const DECAY: f64 = 0.95;
    pub const ALPHA: f64 = 1.0;
    pub const BETA: f64 = 2.0;
    pub const SEED: u64 = 12345;
    // Brute force beyond this is (n-1)! tours and no longer practical.
    pub const EXACT_MAX_CITIES: usize = 10;
}
