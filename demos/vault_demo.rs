//! # Password Vault Demo
//!
//! Demonstrates at-rest encryption of wallet material under a user
//! password.
//!
//! ## Run
//!
//! ```bash
//! cargo run --example vault_demo
//! ```

use shade_core::password;

fn main() {
    println!("=== Shade Core: Password Vault Demo ===\n");

    let secret_note = b"seed backup location: safe deposit box 214";

    // Encrypt under the user's password
    println!("Encrypting a secret note...");
    let record = password::encrypt("correct horse battery staple", secret_note)
        .expect("Failed to encrypt");

    println!("  salt:       {}", hex::encode(&record.salt));
    println!("  iv:         {}", hex::encode(&record.iv));
    println!("  iterations: {}", record.iterations);
    println!(
        "  ciphertext: {} bytes ({} plaintext + {} padding + 16 tag)\n",
        record.ciphertext.len(),
        secret_note.len(),
        record.padding_length
    );

    // The record is self-describing; only the password is missing
    let json = serde_json::to_string_pretty(&record).expect("Failed to serialize");
    println!("Stored record:\n{}\n", json);

    // Decrypt with the right password
    let plaintext = password::decrypt("correct horse battery staple", &record)
        .expect("Failed to decrypt");
    assert_eq!(plaintext, secret_note);
    println!("[OK] Correct password recovers the note\n");

    // A wrong password is detected, not silently garbled
    let denied = password::decrypt("hunter2", &record);
    println!("Wrong password: {}", denied.unwrap_err());

    // Tampering is detected too
    let mut tampered = record.clone();
    tampered.ciphertext[0] ^= 0xFF;
    let denied = password::decrypt("correct horse battery staple", &tampered);
    println!("Tampered record: {}", denied.unwrap_err());
}
