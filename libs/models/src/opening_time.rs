use chrono::NaiveTime;
use diesel::deserialize::{self, FromSql, FromSqlRow};
use diesel::expression::AsExpression;
use diesel::pg::{Pg, PgValue};
use diesel::serialize::{self, Output, ToSql};
use diesel::sql_types::Jsonb;
use serde::{Deserialize, Serialize};

/// A single period during which a restaurant is open
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq, Serialize)]
pub struct TimeRange {
	pub open:  NaiveTime,
	pub close: NaiveTime,
}

/// An ordered list of [`TimeRange`]s, stored as a JSONB array
#[derive(
	AsExpression,
	Clone,
	Debug,
	Default,
	Deserialize,
	FromSqlRow,
	PartialEq,
	Eq,
	Serialize,
)]
#[diesel(sql_type = Jsonb)]
#[serde(transparent)]
pub struct OpeningHours(pub Vec<TimeRange>);

impl OpeningHours {
	#[must_use]
	pub fn is_empty(&self) -> bool { self.0.is_empty() }
}

impl From<Vec<TimeRange>> for OpeningHours {
	fn from(ranges: Vec<TimeRange>) -> Self { Self(ranges) }
}

impl FromSql<Jsonb, Pg> for OpeningHours {
	fn from_sql(bytes: PgValue<'_>) -> deserialize::Result<Self> {
		let value = <serde_json::Value as FromSql<Jsonb, Pg>>::from_sql(bytes)?;

		Ok(serde_json::from_value(value)?)
	}
}

impl ToSql<Jsonb, Pg> for OpeningHours {
	fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
		let value = serde_json::to_value(self)?;

		<serde_json::Value as ToSql<Jsonb, Pg>>::to_sql(&value, &mut out.reborrow())
	}
}
