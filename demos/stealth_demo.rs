//! # Stealth Messaging Demo
//!
//! Demonstrates sealing a message to a recipient's public key and
//! opening it through the identity keystore.
//!
//! ## Run
//!
//! ```bash
//! cargo run --example stealth_demo
//! ```

use shade_core::{
    message_tag, stealth, DerivationScheme, KeyPair, KeyPath, MemoryKeyStore,
};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    println!("=== Shade Core: Stealth Messaging Demo ===\n");

    // Step 1: The recipient's wallet holds a long-term keypair
    println!("Step 1: Creating the recipient's wallet key...");

    let recipient_seed: [u8; 32] = [7u8; 32]; // In production, the wallet master seed
    let recipient = KeyPair::from_seed(&recipient_seed).expect("Failed to derive keypair");

    println!(
        "  Recipient's public key: {}...",
        &recipient.public_key().to_hex()[..16]
    );

    let store = MemoryKeyStore::new(DerivationScheme::Hierarchical);
    let path = KeyPath::new(vec![0, 0, 1]);
    store
        .insert(&path, &recipient, "wallet-password")
        .expect("Failed to store key");
    println!("  Stored at {} under the wallet password\n", path);

    // Step 2: The sender only needs the public key
    println!("Step 2: Sealing a message to that public key...");

    let message = b"Meet me at the usual place.";
    let envelope =
        stealth::encrypt(&recipient.public_key(), message).expect("Failed to encrypt");

    println!(
        "  Ephemeral public key: {}...",
        &envelope.ephemeral_public.to_hex()[..16]
    );
    println!(
        "  Sealed payload: {} bytes (message + padding + tag)\n",
        envelope.payload.ciphertext.len()
    );

    // Step 3: The recipient opens it via the keystore
    println!("Step 3: Opening the envelope through the keystore...");

    let plaintext = stealth::decrypt_for_identity(&envelope, &store, &path, "wallet-password")
        .await
        .expect("Failed to decrypt");

    println!("  Decrypted: \"{}\"", String::from_utf8_lossy(&plaintext));
    assert_eq!(plaintext, message);
    println!("  [OK] Round trip succeeded\n");

    // Step 4: A wrong password never yields plaintext
    println!("Step 4: Trying a wrong wallet password...");

    let denied = stealth::decrypt_for_identity(&envelope, &store, &path, "guess").await;
    println!("  {}\n", denied.unwrap_err());

    // Step 5: Both parties can derive the same matching tag
    println!("Step 5: Deriving a transaction-matching tag...");
    println!(
        "  message_tag(pubkey) = {}",
        message_tag(recipient.public_key().as_bytes())
    );
}
