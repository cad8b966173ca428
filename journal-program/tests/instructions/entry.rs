#![allow(dead_code)]

use super::*;

/// Derives the `JournalEntry` PDA for a `(title, owner)` pair.
pub fn entry_pda(title: &str, owner: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(&[title.as_bytes(), owner.as_ref()], &journal_program::ID).0
}

pub fn create(svm: &mut LiteSVM, owner: &Keypair, title: &str, message: &str) -> (Pubkey, Vec<String>) {
    let (ix, pda) = ix_create(owner, title, message);
    let meta = send_tx(svm, vec![ix], owner).expect("create_entry transaction failed");
    (pda, meta.logs)
}

pub fn update(svm: &mut LiteSVM, owner: &Keypair, title: &str, message: &str) -> Vec<String> {
    let ix = ix_update(owner, title, message);
    let meta = send_tx(svm, vec![ix], owner).expect("update_entry transaction failed");
    meta.logs
}

pub fn delete(svm: &mut LiteSVM, owner: &Keypair, title: &str) -> Vec<String> {
    let ix = ix_delete(owner, title);
    let meta = send_tx(svm, vec![ix], owner).expect("delete_entry transaction failed");
    meta.logs
}

pub fn ix_create(owner: &Keypair, title: &str, message: &str) -> (Instruction, Pubkey) {
    let pda = entry_pda(title, &owner.pubkey());

    let data = journal_instruction::CreateEntry {
        title: title.to_string(),
        message: message.to_string(),
    }
    .data();

    let accounts = journal_accounts::CreateEntry {
        owner: owner.pubkey(),
        journal_entry: pda,
        system_program: system_program::ID,
    }
    .to_account_metas(None);

    let ix = Instruction {
        program_id: journal_program::ID,
        accounts,
        data,
    };

    (ix, pda)
}

pub fn ix_update(owner: &Keypair, title: &str, message: &str) -> Instruction {
    let pda = entry_pda(title, &owner.pubkey());

    let data = journal_instruction::UpdateEntry {
        title: title.to_string(),
        message: message.to_string(),
    }
    .data();

    let accounts = journal_accounts::UpdateEntry {
        owner: owner.pubkey(),
        journal_entry: pda,
        system_program: system_program::ID,
    }
    .to_account_metas(None);

    Instruction {
        program_id: journal_program::ID,
        accounts,
        data,
    }
}

pub fn ix_delete(owner: &Keypair, title: &str) -> Instruction {
    let pda = entry_pda(title, &owner.pubkey());

    let data = journal_instruction::DeleteEntry {
        title: title.to_string(),
    }
    .data();

    let accounts = journal_accounts::DeleteEntry {
        owner: owner.pubkey(),
        journal_entry: pda,
        system_program: system_program::ID,
    }
    .to_account_metas(None);

    Instruction {
        program_id: journal_program::ID,
        accounts,
        data,
    }
}
