// Copyright (C) 2020-2026 Andy Kurnia.

// Fast insecure non-cryptographic hash, tuned for short lowercase names.
// FNV-1a.

pub struct MyHasher(u64);

impl std::hash::Hasher for MyHasher {
    #[inline(always)]
    fn finish(&self) -> u64 {
        self.0
    }

    #[inline(always)]
    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.0 = (self.0 ^ b as u64).wrapping_mul(0x0000_0100_0000_01b3);
        }
    }
}

impl Default for MyHasher {
    #[inline(always)]
    fn default() -> MyHasher {
        MyHasher(0xcbf2_9ce4_8422_2325)
    }
}

pub type MyHasherDefault = std::hash::BuildHasherDefault<MyHasher>;
pub type MyHashMap<K, V> = std::collections::HashMap<K, V, MyHasherDefault>;
