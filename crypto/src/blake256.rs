//! BLAKE-256 digest (the 32-bit BLAKE SHA-3 finalist, 14 rounds).
//!
//! A handful of chains hash address payloads with BLAKE-256 instead of
//! SHA-256. The algorithm has no maintained crate in the ecosystem the rest
//! of this workspace draws from, so it is implemented here and exposed
//! through [`crate::hash::blake256`]. Big-endian message words and output,
//! zero salt.

/// Initial chaining values (shared with SHA-256).
const IV: [u32; 8] = [
    0x6a09e667, 0xbb67ae85, 0x3c6ef372, 0xa54ff53a, 0x510e527f, 0x9b05688c, 0x1f83d9ab,
    0x5be0cd19,
];

/// Round constants (leading hex digits of pi).
const C: [u32; 16] = [
    0x243f6a88, 0x85a308d3, 0x13198a2e, 0x03707344, 0xa4093822, 0x299f31d0, 0x082efa98,
    0xec4e6c89, 0x452821e6, 0x38d01377, 0xbe5466cf, 0x34e90c6c, 0xc0ac29b7, 0xc97c50dd,
    0x3f84d5b5, 0xb5470917,
];

/// Message-word permutation schedule; round `r` uses row `r % 10`.
const SIGMA: [[usize; 16]; 10] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15],
    [14, 10, 4, 8, 9, 15, 13, 6, 1, 12, 0, 2, 11, 7, 5, 3],
    [11, 8, 12, 0, 5, 2, 15, 13, 10, 14, 3, 6, 7, 1, 9, 4],
    [7, 9, 3, 1, 13, 12, 11, 14, 2, 6, 5, 10, 4, 0, 15, 8],
    [9, 0, 5, 7, 2, 4, 10, 15, 14, 1, 11, 12, 6, 8, 3, 13],
    [2, 12, 6, 10, 0, 11, 8, 3, 4, 13, 7, 5, 15, 14, 1, 9],
    [12, 5, 1, 15, 14, 13, 4, 10, 0, 7, 6, 3, 9, 2, 8, 11],
    [13, 11, 7, 14, 12, 1, 3, 9, 5, 0, 15, 4, 8, 6, 2, 10],
    [6, 15, 14, 9, 11, 3, 0, 8, 12, 2, 13, 7, 1, 4, 10, 5],
    [10, 2, 8, 4, 7, 6, 1, 5, 15, 11, 9, 14, 3, 12, 13, 0],
];

/// First padding block: a single 1 bit, then zeros.
const PADDING: [u8; 64] = {
    let mut p = [0u8; 64];
    p[0] = 0x80;
    p
};

/// Incremental BLAKE-256 state.
pub struct Blake256 {
    h: [u32; 8],
    /// Bit counter; raised by 512 per compressed block, adjusted during
    /// padding so each compression sees the message-bit count.
    t: u64,
    /// Set when the final block carries no message bits; such a block is
    /// compressed with a zero counter.
    nullt: bool,
    buf: [u8; 64],
    buflen: usize,
}

impl Blake256 {
    pub fn new() -> Self {
        Self {
            h: IV,
            t: 0,
            nullt: false,
            buf: [0u8; 64],
            buflen: 0,
        }
    }

    /// One-shot digest of `data`.
    pub fn digest(data: &[u8]) -> [u8; 32] {
        let mut state = Self::new();
        state.update(data);
        state.finalize()
    }

    pub fn update(&mut self, mut data: &[u8]) {
        if self.buflen > 0 {
            let take = (64 - self.buflen).min(data.len());
            self.buf[self.buflen..self.buflen + take].copy_from_slice(&data[..take]);
            self.buflen += take;
            data = &data[take..];
            if self.buflen == 64 {
                self.t = self.t.wrapping_add(512);
                let block = self.buf;
                self.compress(&block);
                self.buflen = 0;
            }
        }
        while data.len() >= 64 {
            self.t = self.t.wrapping_add(512);
            let block: [u8; 64] = data[..64].try_into().expect("64-byte chunk");
            self.compress(&block);
            data = &data[64..];
        }
        if !data.is_empty() {
            self.buf[..data.len()].copy_from_slice(data);
            self.buflen = data.len();
        }
    }

    pub fn finalize(mut self) -> [u8; 32] {
        let nx = self.buflen as u64;
        let msg_bits = self.t.wrapping_add(nx << 3);
        let length_words = msg_bits.to_be_bytes();

        if self.buflen == 55 {
            // Exactly one byte of room: merged 0x80 / 0x01 marker.
            self.t = self.t.wrapping_sub(8);
            self.update(&[0x81]);
        } else if self.buflen < 55 {
            if self.buflen == 0 {
                self.nullt = true;
            }
            self.t = self.t.wrapping_sub(440 - (nx << 3));
            let pad = 55 - self.buflen;
            self.update(&PADDING[..pad]);
            self.t = self.t.wrapping_sub(8);
            self.update(&[0x01]);
        } else {
            // Marker and length do not fit; the message spills into a
            // padding-only final block compressed with a zero counter.
            self.t = self.t.wrapping_sub(512 - (nx << 3));
            let pad = 64 - self.buflen;
            self.update(&PADDING[..pad]);
            self.t = self.t.wrapping_sub(440);
            self.update(&PADDING[1..56]);
            self.nullt = true;
            self.t = self.t.wrapping_sub(8);
            self.update(&[0x01]);
        }
        self.t = self.t.wrapping_sub(64);
        self.update(&length_words);

        let mut out = [0u8; 32];
        for (chunk, word) in out.chunks_exact_mut(4).zip(self.h.iter()) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }
        out
    }

    fn compress(&mut self, block: &[u8; 64]) {
        let mut m = [0u32; 16];
        for (word, chunk) in m.iter_mut().zip(block.chunks_exact(4)) {
            *word = u32::from_be_bytes(chunk.try_into().expect("4-byte chunk"));
        }

        let mut v = [0u32; 16];
        v[..8].copy_from_slice(&self.h);
        v[8..].copy_from_slice(&C[..8]);
        if !self.nullt {
            v[12] ^= self.t as u32;
            v[13] ^= self.t as u32;
            v[14] ^= (self.t >> 32) as u32;
            v[15] ^= (self.t >> 32) as u32;
        }

        for round in 0..14 {
            let s = &SIGMA[round % 10];
            g(&mut v, 0, 4, 8, 12, &m, s, 0);
            g(&mut v, 1, 5, 9, 13, &m, s, 1);
            g(&mut v, 2, 6, 10, 14, &m, s, 2);
            g(&mut v, 3, 7, 11, 15, &m, s, 3);
            g(&mut v, 0, 5, 10, 15, &m, s, 4);
            g(&mut v, 1, 6, 11, 12, &m, s, 5);
            g(&mut v, 2, 7, 8, 13, &m, s, 6);
            g(&mut v, 3, 4, 9, 14, &m, s, 7);
        }

        for i in 0..8 {
            self.h[i] ^= v[i] ^ v[i + 8];
        }
    }
}

impl Default for Blake256 {
    fn default() -> Self {
        Self::new()
    }
}

#[inline(always)]
#[allow(clippy::too_many_arguments)]
fn g(
    v: &mut [u32; 16],
    a: usize,
    b: usize,
    c: usize,
    d: usize,
    m: &[u32; 16],
    s: &[usize; 16],
    i: usize,
) {
    v[a] = v[a]
        .wrapping_add(v[b])
        .wrapping_add(m[s[2 * i]] ^ C[s[2 * i + 1]]);
    v[d] = (v[d] ^ v[a]).rotate_right(16);
    v[c] = v[c].wrapping_add(v[d]);
    v[b] = (v[b] ^ v[c]).rotate_right(12);
    v[a] = v[a]
        .wrapping_add(v[b])
        .wrapping_add(m[s[2 * i + 1]] ^ C[s[2 * i]]);
    v[d] = (v[d] ^ v[a]).rotate_right(8);
    v[c] = v[c].wrapping_add(v[d]);
    v[b] = (v[b] ^ v[c]).rotate_right(7);
}
