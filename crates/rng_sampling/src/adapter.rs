//! Bridge from [`UniformRandomProvider`] to [`rand::RngCore`].
//!
//! Lets `rand_distr` distributions consume any provider without copying its
//! state.

use rand::RngCore;
use rng_core::UniformRandomProvider;

/// Mutable view of a provider as a [`rand::RngCore`].
///
/// # Examples
///
/// ```rust
/// use rand::RngCore;
/// use rng_core::source32::JdkRandom;
/// use rng_sampling::ProviderRng;
///
/// let mut jdk = JdkRandom::new(42);
/// let mut rng = ProviderRng::new(&mut jdk);
/// assert_eq!(rng.next_u32() as i32, -1170105035);
/// ```
#[derive(Debug)]
pub struct ProviderRng<'a, R: ?Sized> {
    provider: &'a mut R,
}

impl<'a, R: UniformRandomProvider + ?Sized> ProviderRng<'a, R> {
    /// Wraps `provider`.
    #[inline]
    pub fn new(provider: &'a mut R) -> Self {
        Self { provider }
    }
}

impl<R: UniformRandomProvider + ?Sized> RngCore for ProviderRng<'_, R> {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.provider.next_int() as u32
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.provider.next_long() as u64
    }

    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        UniformRandomProvider::fill_bytes(self.provider, dest)
    }

    #[inline]
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        UniformRandomProvider::fill_bytes(self.provider, dest);
        Ok(())
    }
}
