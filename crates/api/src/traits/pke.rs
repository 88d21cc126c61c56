//! Trait definition for Public Key Encryption (PKE) schemes.

use crate::error::Result; // from api::error
use crate::traits::rng::RandomSource;
use zeroize::Zeroize;

/// Trait for Public Key Encryption schemes over a fixed domain.
///
/// A domain (curve and base point) is session data rather than a compile
/// time constant, so every operation takes `&self`.
pub trait Pke {
    /// Public key type for the PKE scheme.
    type PublicKey: Clone;

    /// Secret key type for the PKE scheme.
    type SecretKey: Zeroize + Clone;

    /// Plaintext type accepted by `encrypt` and returned by `decrypt`.
    type Plaintext;

    /// Ciphertext type produced by the PKE scheme.
    type Ciphertext: Clone;

    /// Returns the PKE algorithm name.
    fn name(&self) -> &'static str;

    /// Generates a new key pair for the PKE scheme.
    fn keypair<R: RandomSource>(&self, rng: &mut R) -> Result<(Self::PublicKey, Self::SecretKey)>;

    /// Encrypts a plaintext using the recipient's public key.
    ///
    /// # Arguments
    /// * `pk_recipient` - The recipient's public key.
    /// * `plaintext` - The message to encrypt.
    /// * `rng` - Source of the ephemeral randomness.
    fn encrypt<R: RandomSource>(
        &self,
        pk_recipient: &Self::PublicKey,
        plaintext: &Self::Plaintext,
        rng: &mut R,
    ) -> Result<Self::Ciphertext>;

    /// Decrypts a ciphertext using the recipient's secret key.
    fn decrypt(
        &self,
        sk_recipient: &Self::SecretKey,
        ciphertext: &Self::Ciphertext,
    ) -> Result<Self::Plaintext>;
}
