use super::domain::ScoreInput;
use super::EvaluationError;
use serde::{Deserialize, Deserializer};
use std::io::Read;

/// Parses a judge's CSV score sheet into raw inputs for the engine.
///
/// Expected columns: `Criterion ID` and `Points`. Blank point cells mean the
/// criterion has not been scored yet and are skipped (the engine defaults
/// them to 0); non-numeric cells are rejected. When a criterion appears more
/// than once the last row wins.
pub fn parse_score_sheet<R: Read>(reader: R) -> Result<ScoreInput, EvaluationError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut inputs = ScoreInput::new();
    for record in csv_reader.deserialize::<SheetRow>() {
        let row = record.map_err(|err| EvaluationError::MalformedScoreSheet {
            detail: err.to_string(),
        })?;

        let Some(points) = row.points else {
            continue;
        };
        let value: f64 = points
            .parse()
            .map_err(|_| EvaluationError::InvalidScoreInput {
                criterion: row.criterion_id.clone(),
                value: points.clone(),
            })?;
        inputs.insert(row.criterion_id, value);
    }

    Ok(inputs)
}

#[derive(Debug, Deserialize)]
struct SheetRow {
    #[serde(rename = "Criterion ID")]
    criterion_id: String,
    #[serde(rename = "Points", default, deserialize_with = "empty_string_as_none")]
    points: Option<String>,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
