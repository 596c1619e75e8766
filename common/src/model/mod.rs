pub mod debtor;
