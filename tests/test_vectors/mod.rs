// Fixed key material produced by independent tooling, for interoperability testing.
//
// rsa1024.priv / rsa1024.pub: base64 RSAKeyValue documents in the .NET layout
// rsa1024_hello.sig: hex PKCS#1 v1.5 / SHA-512 signature of "hello"
// ecdsa.priv: SEC1 ECPrivateKey DER (secp256k1, curve OID and public key included)
// ecdsa.pub: SubjectPublicKeyInfo DER, uncompressed point
// ecdsa_hello.sig: hex DER ECDSA / SHA-256 signature of "hello"

pub const SIGNED_MESSAGE: &str = "hello";

pub mod rsa1024 {
    pub const PRIVATE_KEY: &str = include_str!("rsa1024.priv");
    pub const PUBLIC_KEY: &str = include_str!("rsa1024.pub");
    pub const HELLO_SIGNATURE: &str = include_str!("rsa1024_hello.sig");
}

pub mod ecdsa {
    pub const PRIVATE_KEY_DER: &[u8] = include_bytes!("ecdsa.priv");
    pub const PUBLIC_KEY_DER: &[u8] = include_bytes!("ecdsa.pub");
    pub const HELLO_SIGNATURE: &str = include_str!("ecdsa_hello.sig");
}
