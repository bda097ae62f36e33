// src/crypto/hmac.rs

//! Truncated HMAC-SHA256 tags over `iv || body`.
//!
//! Comparison goes through [`Mac::verify_truncated_left`], which is constant-time.

use crate::aliases::{HmacSha256, Iv16, MacKey32};
use crate::consts::MAC_TAG_LEN;
use hmac::Mac;

#[inline(always)]
fn keyed_mac(mac_key: &MacKey32, iv: &Iv16, body: &[u8]) -> HmacSha256 {
    let mut mac = <HmacSha256 as Mac>::new_from_slice(mac_key.expose_secret())
        .expect("mac_key is always 32 bytes, a valid HMAC-SHA256 key");
    mac.update(iv.expose_secret());
    mac.update(body);
    mac
}

/// First 10 bytes of `HMAC-SHA256(mac_key, iv || body)`.
#[must_use]
pub fn compute_tag(mac_key: &MacKey32, iv: &Iv16, body: &[u8]) -> [u8; MAC_TAG_LEN] {
    let digest = keyed_mac(mac_key, iv, body).finalize().into_bytes();
    let mut tag = [0u8; MAC_TAG_LEN];
    tag.copy_from_slice(&digest[..MAC_TAG_LEN]);
    tag
}

/// Constant-time check of a received tag. `false` means "this layout/key pair
/// does not apply", never a hard error.
#[must_use]
pub fn verify_tag(mac_key: &MacKey32, iv: &Iv16, body: &[u8], tag: &[u8; MAC_TAG_LEN]) -> bool {
    keyed_mac(mac_key, iv, body)
        .verify_truncated_left(tag)
        .is_ok()
}
