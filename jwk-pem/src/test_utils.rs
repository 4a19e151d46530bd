//! Known RSA public keys in their JWK form

use base64::{Engine, prelude::BASE64_URL_SAFE_NO_PAD};

use crate::prelude::*;

/// Standard public exponent 65537
pub const E_65537: &str = "AQAB";

/// 2048-bit modulus from [RFC 7517 Appendix A.1](https://www.rfc-editor.org/rfc/rfc7517#appendix-A.1)
pub const RFC7517_N: &str = "0vx7agoebGcQSuuPiLJXZptN9nndrQmbXEps2aiAFbWhM78LhWx4cbbfAAtVT86zwu1RK7aPFFxuhDR1L6tSoc_BJECPebWKRXjBZCiFV4n3oknjhMstn64tZ_2W-5JsGY4Hc5n9yBXArwl93lqt7_RN5w6Cf0h4QyQ5v-65YGjQR0_FDW2QvzqY368QQMicAtaSqzs8KJZgnYb9c7d0zgdAZHzu6qMQvRL5hajrn1n91CbOpbISD08qNLyrdkt-bFTWhAI4vMQFh6WeZu0fM4lFd2NcRwr3XPksINHaQ-G_xBniIqbw0Ls1jF44-csFCur-kEgU8awapJzKnqDKgw";

/// [RFC7517_N] with [E_65537] as SubjectPublicKeyInfo
pub const RFC7517_PEM: &str = "-----BEGIN PUBLIC KEY-----
MIIBIjANBgkqhkiG9w0BAQEFAAOCAQ8AMIIBCgKCAQEA0vx7agoebGcQSuuPiLJX
ZptN9nndrQmbXEps2aiAFbWhM78LhWx4cbbfAAtVT86zwu1RK7aPFFxuhDR1L6tS
oc/BJECPebWKRXjBZCiFV4n3oknjhMstn64tZ/2W+5JsGY4Hc5n9yBXArwl93lqt
7/RN5w6Cf0h4QyQ5v+65YGjQR0/FDW2QvzqY368QQMicAtaSqzs8KJZgnYb9c7d0
zgdAZHzu6qMQvRL5hajrn1n91CbOpbISD08qNLyrdkt+bFTWhAI4vMQFh6WeZu0f
M4lFd2NcRwr3XPksINHaQ+G/xBniIqbw0Ls1jF44+csFCur+kEgU8awapJzKnqDK
gwIDAQAB
-----END PUBLIC KEY-----
";

/// Another 2048-bit modulus, the one used by the RFC 7638 thumbprint test vectors
pub const RFC7638_N: &str = "3Ra1kbdyBFvCtL459VQMK8h8ry2wPJXlf3ZBzP5Lu6DPSLbmH_BXB4bVQ1MMo5hgQ0aIN6bw4Bb1qN-qUpKCr3a-TN3wfmYfjAl1Km-qYMpPPZliZyLKqx9_m0prClyffIBnYxZF04KQDHSkgqDxYywUqAKBlhu37RP0HFD7ZwPUdlv1DL_ep2zlm8CiWyvRe1kKpnvFqq6VLwOFia4eXenEwRE4GEDqj9PpmPCN6Bd-PvlBxI8GsWbl57pCXW6zsh3TV70b2rJDGEm06kORNvN5C_X_8U6lIVeCepeFDJKgyKH5lMhbV6uSl2-AX6TK0ARzvx3DQK16KRhO95RRQw";

/// [RFC7638_N] with [E_65537] as SubjectPublicKeyInfo
pub const RFC7638_PEM: &str = "-----BEGIN PUBLIC KEY-----
MIIBIjANBgkqhkiG9w0BAQEFAAOCAQ8AMIIBCgKCAQEA3Ra1kbdyBFvCtL459VQM
K8h8ry2wPJXlf3ZBzP5Lu6DPSLbmH/BXB4bVQ1MMo5hgQ0aIN6bw4Bb1qN+qUpKC
r3a+TN3wfmYfjAl1Km+qYMpPPZliZyLKqx9/m0prClyffIBnYxZF04KQDHSkgqDx
YywUqAKBlhu37RP0HFD7ZwPUdlv1DL/ep2zlm8CiWyvRe1kKpnvFqq6VLwOFia4e
XenEwRE4GEDqj9PpmPCN6Bd+PvlBxI8GsWbl57pCXW6zsh3TV70b2rJDGEm06kOR
NvN5C/X/8U6lIVeCepeFDJKgyKH5lMhbV6uSl2+AX6TK0ARzvx3DQK16KRhO95RR
QwIDAQAB
-----END PUBLIC KEY-----
";

/// 3072-bit modulus
pub const RSA_3072_N: &str = "wHl-dpnWkp_ApF3svnuW02wCW_VpiIu_p8Kg9kjJ6f_bbAvw60U4UTj1_HdYNT0xsDxtU87U2PVBMoj6TX7PF9Ljm-8lBg73bbnYs6q0fRCughwwivn4GqnY0n7nYOZNAeJp-BZZzKqMborCJ0cfdxvI9g9XY9wPpTvwiRomHf3rHLXCK3xjnA7DhKVG2C11CVyHJmPK0Oufi-faz4J-SV-a6mXUCn8Mt3-wn7WWHY5BivVNNXM3qFryUw0PBvXhLd0pVA-DFINs2komihECVmxFPHmroTZpzaJBaFKy6rpTRHf7WzBCdYxZBngJEAekBWKE4zvJgHJAqRY0W2c_iLR48HCxTJUKa-Y2peN5OJISpRtP4akETli9o9n_36PmcCXXmg9m6adPj1BRm1FdPK4raHBZZ1JFEqv7IvnNaOw-CI1nf0MPohuOPgn1KKi-oupJ8oX_7rqJlmvuxYpE-0AhSHJ2K3Ao_YmJHQR77R6327b_pUqa8815ySpdcmwf";

/// 4096-bit modulus
pub const RSA_4096_N: &str = "pumvtfDcoBffxtZrNqSW0q7UnB6GLjxeIN3-__y059zewHupopTwfX6YmfyD1vdFrAgpncaOoK1RLHIf-wNEeWiU8gxTJ3lPh6waG0nLIWk4helAiWZGZ67Qr7fdueUYJRcn_IVvtuSf5A4iszRkhu2CVZGh1HQWn6taBD3k1OfdUFbTVt5QArAlAr-XObQQM2TvI-zGQL7AMcmGkaauh1PzDRYo8HMbSOAZVW7KNnN1Okv8rzN6fzzD1LoMjMDoGahjq5adIzibNmswClHO-9pvL_vZU-B35fLFQ7HtcFmMy9azuJU9JFOtHdURmYYrPyLpqkjpRIocqqq6RzDqw1mAnax39Q7Nv6eIqzXu-_SkgBKuyBILeWt6Iey5pkAFr8uKWdjJGB3xDuTR51_flsvm0q8FqvZnZhgUN9S07dQPyPbl4uMIdrtOFgcstVRFpLBwhQ_MUzbNvdiZiJJFU-s1FyaPfewi6XxyFMIqCQLbZjTVhRJT9DBSsDNthIYBvpnynw0lMG6Ubt-x-lyMkHm3-pV6Okdnnz9pO7tUCcBF-Y66z72hZgqEikwG1KTNePm2swlhBs5Q109EHxtfI5bnNgPXTcwu8C7vC9cr3Mm6bNflQUrPwI4uPzfkNdWNW43AKs_T84yaHTa2LgwuCDQH953L1xPm11x8O6oqrOU";

/// Decodes a base64url string with a strict decoder, independently of the crate's own decoder
pub fn raw_bytes(base64url: &str) -> Vec<u8> {
    BASE64_URL_SAFE_NO_PAD.decode(base64url).unwrap()
}

/// Integer value of a base64url string, decoded with a strict decoder
pub fn raw_uint(base64url: &str) -> BigUint {
    BigUint::from_bytes_be(&raw_bytes(base64url))
}

/// Base64url encoding of arbitrary bytes
pub fn encode(bytes: &[u8]) -> String {
    BASE64_URL_SAFE_NO_PAD.encode(bytes)
}
