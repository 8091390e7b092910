pub mod splitmix;
pub mod xoroshiro;
