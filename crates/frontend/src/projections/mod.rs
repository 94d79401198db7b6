pub mod p900_trial_balance;
