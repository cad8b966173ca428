#![allow(dead_code)]

pub mod entry;

use anchor_lang::{system_program, InstructionData, ToAccountMetas};
use base64::{engine::general_purpose, Engine as _};
use litesvm::types::{FailedTransactionMetadata, TransactionMetadata};
use litesvm::LiteSVM;
use solana_program::clock::Clock;

use solana_program::{instruction::Instruction, native_token::LAMPORTS_PER_SOL, pubkey::Pubkey};
use solana_sdk::{
    compute_budget::ComputeBudgetInstruction, signature::Keypair, signer::Signer,
    transaction::Transaction,
};
use journal_program::{accounts as journal_accounts, instruction as journal_instruction};

/// A constant path to the compiled on-chain program binary (`.so` file).
/// This is used by `setup_svm` to load the program into the test environment.
const PATH_SBF: &str = "../target/deploy/journal_program.so";

/// Initializes the `LiteSVM` test environment and loads the journal program
/// into it. This is the foundation for every test case, creating a fresh,
/// sandboxed "virtual blockchain" for each test to run in.
pub fn setup_svm() -> LiteSVM {
    let mut svm = LiteSVM::new();
    svm.add_program_from_file(journal_program::ID, PATH_SBF)
        .unwrap();
    // Initialize the Clock sysvar, as the program depends on it for event timestamps.
    svm.set_sysvar(&Clock::default());
    svm
}

/// A simple wrapper for `Keypair::new()` for consistency across tests.
pub fn create_keypair() -> Keypair {
    Keypair::new()
}

/// Creates a new `Keypair` and funds its on-chain account with the specified
/// amount of lamports, so it can sign transactions and pay fees and rent.
pub fn create_funded_keypair(svm: &mut LiteSVM, lamports: u64) -> Keypair {
    let keypair = Keypair::new();
    svm.airdrop(&keypair.pubkey(), lamports).unwrap();
    keypair
}

/// A generic helper to construct, sign, and send a transaction to the `LiteSVM`.
///
/// It prepends a `ComputeBudget` instruction, signs with the owner's wallet,
/// and advances the clock so consecutive transactions don't collide on the
/// same blockhash. Returns the raw result so callers can assert on either
/// success logs or failure metadata.
pub fn send_tx(
    svm: &mut LiteSVM,
    instructions: Vec<Instruction>,
    payer_and_signer: &Keypair,
) -> Result<TransactionMetadata, FailedTransactionMetadata> {
    let mut all_instructions = vec![ComputeBudgetInstruction::set_compute_unit_limit(400_000)];
    all_instructions.extend(instructions);

    let mut tx = Transaction::new_with_payer(&all_instructions, Some(&payer_and_signer.pubkey()));
    tx.sign(&[payer_and_signer], svm.latest_blockhash());

    // Advance the clock to simulate time passing between transactions.
    let mut clock = svm.get_sysvar::<Clock>();
    clock.slot += 1;
    svm.set_sysvar(&clock);

    svm.send_transaction(tx)
}

pub fn parse_events<E>(logs: &[String]) -> Vec<E>
where
    E: anchor_lang::Event + anchor_lang::AnchorDeserialize + anchor_lang::Discriminator,
{
    let mut events = Vec::new();
    for log in logs {
        if let Some(data_str) = log.strip_prefix("Program data: ") {
            if let Ok(bytes) = general_purpose::STANDARD.decode(data_str.trim()) {
                if bytes.len() > E::DISCRIMINATOR.len() {
                    let (disc_bytes, event_data) = bytes.split_at(E::DISCRIMINATOR.len());
                    if disc_bytes == E::DISCRIMINATOR {
                        if let Ok(e) = E::try_from_slice(event_data) {
                            events.push(e);
                        }
                    }
                }
            }
        }
    }
    events
}

/// Extracts the custom program error code from a transaction error.
/// This is used in failure-case tests to assert that the correct error was returned.
pub fn get_error_code(
    result: Result<TransactionMetadata, FailedTransactionMetadata>,
) -> Option<u32> {
    match result {
        Err(failed_meta) => match failed_meta.err {
            solana_sdk::transaction::TransactionError::InstructionError(
                _,
                solana_sdk::instruction::InstructionError::Custom(code),
            ) => Some(code),
            _ => None,
        },
        _ => {
            println!("Unexpected transaction result: {result:?}");
            None
        }
    }
}
