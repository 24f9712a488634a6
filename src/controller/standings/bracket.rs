use serde::Serialize;

use super::ranker::{PLAYOFF_PLACES, StandingsRow};
use crate::model::{Fixture, PlayoffStage};

#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct PlayoffBracket {
    pub quarterfinals: Vec<Fixture>,
    pub semifinals: Vec<Fixture>,
    pub r#final: Option<Fixture>,
    /// Team name of the winner of a completed final.
    pub champion: Option<String>,
    /// Top of the table going into the playoffs. Display only.
    pub seeds: Vec<StandingsRow>,
}

impl PlayoffBracket {
    #[must_use]
    pub fn stage(&self, stage: PlayoffStage) -> &[Fixture] {
        match stage {
            PlayoffStage::Quarterfinal => &self.quarterfinals,
            PlayoffStage::Semifinal => &self.semifinals,
            PlayoffStage::Final => self.r#final.as_slice(),
            PlayoffStage::Unknown => &[],
        }
    }
}

/// Assembles a bracket from stage-tagged fixtures.
///
/// Returns `None` when no fixture carries a playoff stage. The champion is set
/// only once the final is completed with a strictly higher score on one side.
#[must_use]
pub fn derive_bracket<'a, I>(fixtures: I, standings: &[StandingsRow]) -> Option<PlayoffBracket>
where
    I: IntoIterator<Item = &'a Fixture>,
{
    let mut bracket = PlayoffBracket::default();
    let mut tagged = false;

    for fixture in fixtures {
        let Some(stage) = fixture.stage.filter(|s| *s != PlayoffStage::Unknown) else {
            continue;
        };
        tagged = true;
        match stage {
            PlayoffStage::Quarterfinal => bracket.quarterfinals.push(fixture.clone()),
            PlayoffStage::Semifinal => bracket.semifinals.push(fixture.clone()),
            PlayoffStage::Final => {
                if bracket.r#final.is_none() {
                    bracket.r#final = Some(fixture.clone());
                } else {
                    log::warn!(
                        "ignoring extra final fixture {} ({} v {})",
                        fixture.id,
                        fixture.home_team,
                        fixture.away_team
                    );
                }
            }
            PlayoffStage::Unknown => {}
        }
    }

    if !tagged {
        return None;
    }

    bracket.champion = bracket
        .r#final
        .as_ref()
        .and_then(Fixture::winner)
        .map(str::to_string);
    bracket.seeds = standings.iter().take(PLAYOFF_PLACES).cloned().collect();

    Some(bracket)
}
