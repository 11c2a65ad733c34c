// Encrypt each base64 line of stdin with AES-128-CTR under one random key
// and a zero nonce, then recover the plaintexts from the ciphertexts alone.
use fixed_nonce_ctr::{aes128, random_aes128_key, CiphertextSession};

use base64::{engine::general_purpose::STANDARD, Engine};
use tracing::info;
use tracing_subscriber::EnvFilter;

use std::io::{BufRead, Write};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cipher = aes128(&random_aes128_key());
    let nonce = [0u8; 16];
    let mut session = CiphertextSession::new();
    for (line_no, line) in std::io::stdin().lock().lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let plaintext = STANDARD
            .decode(line.trim())
            .map_err(|e| format!("line {}: {e}", line_no + 1))?;
        session.push_encrypted(&cipher, &nonce, &plaintext)?;
    }
    info!(n_messages = session.len(), "encrypted messages");

    let recovery = session.break_keystream();
    info!(
        truncated_len = recovery.truncated_len(),
        keystream = %to_hex(&recovery.keystream),
        printable_ratio = recovery.printable_ratio(),
        "recovered keystream"
    );

    let mut stdout = std::io::stdout().lock();
    for plaintext in &recovery.plaintexts {
        writeln!(stdout, "{}", String::from_utf8_lossy(plaintext))?;
    }
    Ok(())
}

fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}
