//! Fixed-point conversion between the custodian token's decimal scale and
//! the ledger's wad (1e18) unit.
//!
//! The host traps on U256/I256 overflow, so every bound is checked before
//! the arithmetic and surfaced as `VaultError::Overflow`.

use soroban_sdk::{Env, I256, U256};
use vault_fc_interface::VaultError;

pub const WAD: u128 = 1_000_000_000_000_000_000;

pub fn wad(env: &Env) -> U256 {
    U256::from_u128(env, WAD)
}

pub fn pow10(env: &Env, decimals: u32) -> U256 {
    U256::from_u32(env, 10).pow(decimals)
}

fn u256_max(env: &Env) -> U256 {
    U256::from_parts(env, u64::MAX, u64::MAX, u64::MAX, u64::MAX)
}

/// Largest unsigned value representable as a non-negative I256 (2^255 - 1).
fn i256_max_unsigned(env: &Env) -> U256 {
    U256::from_parts(env, i64::MAX as u64, u64::MAX, u64::MAX, u64::MAX)
}

fn to_signed(env: &Env, value: &U256) -> Result<I256, VaultError> {
    if *value > i256_max_unsigned(env) {
        return Err(VaultError::Overflow);
    }
    Ok(I256::from_be_bytes(env, &value.to_be_bytes()))
}

/// `numerator * factor / divisor` without the full product, split as
/// `q * factor + r * factor / divisor` with `q, r = numerator divmod divisor`.
/// Results above `limit` fail with `Overflow`.
fn mul_div(
    env: &Env,
    numerator: &U256,
    factor: &U256,
    divisor: &U256,
    limit: &U256,
) -> Result<U256, VaultError> {
    let q = numerator.div(divisor);
    let r = numerator.rem_euclid(divisor);

    // r < divisor, so r * factor only overflows for divisors above U256::MAX / factor
    if *factor > U256::from_u32(env, 0) && r > u256_max(env).div(factor) {
        return Err(VaultError::Overflow);
    }
    let low = r.mul(factor).div(divisor);

    if *factor > U256::from_u32(env, 0) && q > limit.div(factor) {
        return Err(VaultError::Overflow);
    }
    let high = q.mul(factor);
    if high > limit.sub(&low) {
        return Err(VaultError::Overflow);
    }
    Ok(high.add(&low))
}

/// `amount * WAD / scale`, truncated, as a signed wad. Fails only when the
/// result leaves the signed range, or when `amount` itself is 2^255 or more.
pub fn to_internal(env: &Env, amount: &U256, scale: &U256) -> Result<I256, VaultError> {
    let limit = i256_max_unsigned(env);
    if *amount > limit {
        return Err(VaultError::Overflow);
    }
    to_signed(env, &mul_div(env, amount, &wad(env), scale, &limit)?)
}

/// `wad * scale / WAD`, truncated. Negative wads have no external amount.
pub fn to_external(env: &Env, wad: &I256, scale: &U256) -> Result<U256, VaultError> {
    if *wad < I256::from_i32(env, 0) {
        return Err(VaultError::Overflow);
    }
    let value = U256::from_be_bytes(env, &wad.to_be_bytes());
    mul_div(env, &value, scale, &self::wad(env), &u256_max(env))
}

pub fn negate(env: &Env, value: &I256) -> I256 {
    I256::from_i32(env, 0).sub(value)
}

#[cfg(test)]
mod test {
    use super::*;

    const FCASH_SCALE: u128 = 100_000_000;

    #[test]
    fn test_to_internal_scales_to_wad() {
        let env = Env::default();
        let scale = U256::from_u128(&env, FCASH_SCALE);

        let wad = to_internal(&env, &U256::from_u128(&env, 100 * FCASH_SCALE), &scale).unwrap();
        assert_eq!(wad, I256::from_i128(&env, 100 * WAD as i128));
    }

    #[test]
    fn test_to_internal_truncates() {
        let env = Env::default();
        // 9 * 1e18 / 1e19 = 0.9
        let scale = pow10(&env, 19);
        let wad = to_internal(&env, &U256::from_u32(&env, 9), &scale).unwrap();
        assert_eq!(wad, I256::from_i32(&env, 0));
    }

    #[test]
    fn test_to_internal_rejects_top_bit() {
        let env = Env::default();
        let amount = U256::from_parts(&env, 1 << 63, 0, 0, 0);
        assert_eq!(
            to_internal(&env, &amount, &U256::from_u128(&env, FCASH_SCALE)),
            Err(VaultError::Overflow)
        );
    }

    #[test]
    fn test_to_internal_is_exact_past_u256_max_over_wad() {
        let env = Env::default();
        // 2^200 * 1e18 exceeds 256 bits, the scaled result 2^200 * 1e10 does not
        let amount = U256::from_parts(&env, 1 << 8, 0, 0, 0);
        let scale = U256::from_u128(&env, FCASH_SCALE);
        let expected = amount.mul(&U256::from_u128(&env, 10_000_000_000));

        let wad = to_internal(&env, &amount, &scale).unwrap();
        assert_eq!(wad, I256::from_be_bytes(&env, &expected.to_be_bytes()));
    }

    #[test]
    fn test_to_internal_keeps_remainder_precision() {
        let env = Env::default();
        // (3e8 + 12_345) * 1e18 / 1e8
        let amount = U256::from_u128(&env, 300_012_345);
        let scale = U256::from_u128(&env, FCASH_SCALE);
        assert_eq!(
            to_internal(&env, &amount, &scale).unwrap(),
            I256::from_i128(&env, 3_000_123_450_000_000_000)
        );

        // non-power-of-ten scale truncates the remainder term
        let wad = to_internal(&env, &U256::from_u32(&env, 7), &U256::from_u32(&env, 3)).unwrap();
        assert_eq!(wad, I256::from_i128(&env, 2_333_333_333_333_333_333));
    }

    #[test]
    fn test_to_internal_signed_bound_at_fcash_scale() {
        let env = Env::default();
        let scale = U256::from_u128(&env, FCASH_SCALE);
        let ten_ten = U256::from_u128(&env, 10_000_000_000);
        let largest = i256_max_unsigned(&env).div(&ten_ten);

        let wad = to_internal(&env, &largest, &scale).unwrap();
        assert_eq!(
            wad,
            I256::from_be_bytes(&env, &largest.mul(&ten_ten).to_be_bytes())
        );
        assert_eq!(
            to_internal(&env, &largest.add(&U256::from_u32(&env, 1)), &scale),
            Err(VaultError::Overflow)
        );
    }

    #[test]
    fn test_to_internal_rejects_quotient_past_signed_range() {
        let env = Env::default();
        // fits the multiplication but a scale below WAD pushes the result past 2^255
        let amount = u256_max(&env).div(&wad(&env));
        assert_eq!(
            to_internal(&env, &amount, &U256::from_u32(&env, 1)),
            Err(VaultError::Overflow)
        );
    }

    #[test]
    fn test_to_external_inverts_to_internal() {
        let env = Env::default();
        let scale = U256::from_u128(&env, FCASH_SCALE);
        let amount = U256::from_u128(&env, 123_456_789);

        let wad = to_internal(&env, &amount, &scale).unwrap();
        assert_eq!(to_external(&env, &wad, &scale).unwrap(), amount);
    }

    #[test]
    fn test_to_external_rejects_negative() {
        let env = Env::default();
        let wad = negate(&env, &I256::from_i128(&env, WAD as i128));
        assert_eq!(
            to_external(&env, &wad, &U256::from_u128(&env, FCASH_SCALE)),
            Err(VaultError::Overflow)
        );
    }

    #[test]
    fn test_negate() {
        let env = Env::default();
        assert_eq!(
            negate(&env, &I256::from_i128(&env, 5)),
            I256::from_i128(&env, -5)
        );
    }
}
