use std::error::Error;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use rand::{Rng, SeedableRng};
use rand_isaac::Isaac64Rng;
use serde::{Deserialize, Deserializer};

// Lenient numeric parsing: a blank, unparseable, or NaN cell becomes None
// instead of failing the whole record, so the row can be dropped later.
fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw
        .and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| !v.is_nan()))
}

fn lenient_i32<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|s| s.trim().parse::<i32>().ok()))
}

#[derive(Debug, Deserialize, Clone)]
pub struct Transaction {
    #[serde(deserialize_with = "lenient_i32", default)]
    pub step: Option<i32>,
    #[serde(rename = "type")]
    pub tx_type: String,
    #[serde(deserialize_with = "lenient_f64", default)]
    pub amount: Option<f64>,
    #[serde(rename = "nameOrig")]
    pub name_orig: String,
    #[serde(rename = "oldbalanceOrg", deserialize_with = "lenient_f64", default)]
    pub old_balance_orig: Option<f64>,
    #[serde(rename = "newbalanceOrig", deserialize_with = "lenient_f64", default)]
    pub new_balance_orig: Option<f64>,
    #[serde(rename = "nameDest")]
    pub name_dest: String,
    #[serde(rename = "oldbalanceDest", deserialize_with = "lenient_f64", default)]
    pub old_balance_dest: Option<f64>,
    #[serde(rename = "newbalanceDest", deserialize_with = "lenient_f64", default)]
    pub new_balance_dest: Option<f64>,
    #[serde(rename = "isFraud", deserialize_with = "lenient_i32", default)]
    pub is_fraud: Option<i32>,
    #[serde(rename = "isFlaggedFraud", deserialize_with = "lenient_i32", default)]
    pub is_flagged_fraud: Option<i32>,
}

impl Transaction {
    // True when every numeric column parsed; rows failing this are dropped,
    // mirroring a cast-then-drop-nulls cleaning pass.
    pub fn is_complete(&self) -> bool {
        self.step.is_some()
            && self.amount.is_some()
            && self.old_balance_orig.is_some()
            && self.new_balance_orig.is_some()
            && self.old_balance_dest.is_some()
            && self.new_balance_dest.is_some()
            && self.is_fraud.is_some()
            && self.is_flagged_fraud.is_some()
    }

    // The five numeric columns used for clustering. Categorical columns and
    // the fraud labels are deliberately excluded.
    pub fn to_feature_vector(&self) -> Vec<f64> {
        vec![
            self.amount.unwrap_or(0.0),
            self.old_balance_orig.unwrap_or(0.0),
            self.new_balance_orig.unwrap_or(0.0),
            self.old_balance_dest.unwrap_or(0.0),
            self.new_balance_dest.unwrap_or(0.0),
        ]
    }
}

pub fn read_transactions_from<R: Read>(reader: R) -> Result<Vec<Transaction>, Box<dyn Error>> {
    let mut rdr = csv::Reader::from_reader(reader);

    let transactions: Vec<Transaction> = rdr
        .deserialize()
        .collect::<Result<Vec<Transaction>, csv::Error>>()?;

    Ok(transactions)
}

pub fn read_transactions(file_path: &Path) -> Result<Vec<Transaction>, Box<dyn Error>> {
    let file = File::open(file_path)?;
    read_transactions_from(file)
}

// Drop rows whose numeric columns failed to parse.
pub fn drop_incomplete(transactions: Vec<Transaction>) -> Vec<Transaction> {
    transactions
        .into_iter()
        .filter(Transaction::is_complete)
        .collect()
}

// Bernoulli sampling without replacement: keep each row independently with
// probability pct/100. A fixed seed keeps the trial reproducible across a
// parameter sweep. pct >= 100 keeps everything.
pub fn sample_fraction(transactions: Vec<Transaction>, pct: u32, seed: u64) -> Vec<Transaction> {
    if pct >= 100 {
        return transactions;
    }
    let fraction = f64::from(pct) / 100.0;
    let mut rng = Isaac64Rng::seed_from_u64(seed);
    transactions
        .into_iter()
        .filter(|_| rng.gen::<f64>() < fraction)
        .collect()
}
