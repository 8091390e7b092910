pub mod murmur3;
