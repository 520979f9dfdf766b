use std::env;
use std::process;

use anyhow::{bail, Context};
use log::info;
use rsa_cbc::rsa::random::RandomSource;
use rsa_cbc::{decrypt, encrypt, generate_keys_with, BitVector, RsaConfig};

const USAGE: &str = "usage: rsa_cbc [KEY_BITS] [MESSAGE_BITS] [BLOCK_BITS]";

fn arg(args: &[String], index: usize, name: &str, default: u64) -> anyhow::Result<u64> {
    match args.get(index) {
        Some(value) => value
            .parse()
            .with_context(|| format!("invalid {} '{}'\n{}", name, value, USAGE)),
        None => Ok(default),
    }
}

/// Generate keys, encrypt a random message and check that it decrypts back
fn run() -> anyhow::Result<bool> {
    let args: Vec<String> = env::args().skip(1).collect();
    let key_bits = arg(&args, 0, "key size", 200)?;
    let message_bits = arg(&args, 1, "message size", 3000)?;
    let block_bits = arg(&args, 2, "block size", 150)? as usize;
    if message_bits == 0 {
        bail!("message size must be positive\n{}", USAGE);
    }

    println!("key size > {}", key_bits);
    println!("bits to encrypt/decrypt > {}", message_bits);
    println!("block size > {}", block_bits);

    let mut rng = rand::thread_rng();
    let message = BitVector::from_uint(&rng.random_bits(message_bits - 1), message_bits as usize);

    let keys = generate_keys_with(key_bits, &RsaConfig::default(), &mut rng)
        .context("key generation failed")?;
    println!("p > {}", keys.factors.p);
    println!("q > {}", keys.factors.q);
    println!("n > {}", keys.public_key.n);
    println!("d > {}", keys.private_key.d);
    println!("e > {}", keys.public_key.e);
    println!("size of n=pq > {}", keys.bit_length());

    let ciphertext = encrypt(block_bits, &keys.public_key, &message, &mut rng)
        .context("encryption failed")?;
    info!("ciphertext is {} bits", ciphertext.len());
    let preview: Vec<u8> = ciphertext.to_bytes().into_iter().take(32).collect();
    println!("ciphertext > {}...", hex::encode(preview));

    let decrypted = decrypt(block_bits, &keys.private_key, &ciphertext)
        .context("decryption failed")?;

    // decryption keeps the zero padding added to reach a whole block
    Ok(decrypted.len() >= message.len() && decrypted[..message.len()] == message[..])
}

fn main() {
    env_logger::init();

    match run() {
        Ok(true) => println!("** SUCCESS **"),
        Ok(false) => {
            println!("** FAIL **");
            process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(2);
        }
    }
}
