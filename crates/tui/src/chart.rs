use api_types::record::RecordsResponse;

/// One slice of the spending chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSlice {
    pub label: String,
    /// Direct plus credit spend of the category.
    pub amount: f64,
    /// Share of the total spend, rounded to whole percent.
    pub percent: u64,
}

/// Category shares of the spend in the selected range.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartDataset {
    pub slices: Vec<ChartSlice>,
    pub total: f64,
}

impl ChartDataset {
    /// Builds the dataset for a records response.
    ///
    /// Labels are every category present in either breakdown, direct ones
    /// first. Returns `None` when there is nothing to draw: no category at
    /// all, or no spend to divide by.
    pub fn from_response(response: &RecordsResponse) -> Option<Self> {
        let mut labels: Vec<&str> = response.stats.keys().map(String::as_str).collect();
        labels.extend(
            response
                .stats_credit
                .keys()
                .map(String::as_str)
                .filter(|label| !response.stats.contains_key(*label)),
        );
        if labels.is_empty() {
            return None;
        }

        let total = response.total_spend();
        if !total.is_finite() || total <= 0.0 {
            return None;
        }

        let slices = labels
            .into_iter()
            .map(|label| {
                let direct = response.stats.get(label).map_or(0.0, |stat| stat.amount);
                let credit = response
                    .stats_credit
                    .get(label)
                    .map_or(0.0, |stat| stat.amount);
                let amount = direct + credit;
                let percent = (amount / total * 100.0).round().max(0.0) as u64;
                ChartSlice {
                    label: label.to_string(),
                    amount,
                    percent,
                }
            })
            .collect();

        Some(Self { slices, total })
    }

    pub fn percent_sum(&self) -> u64 {
        self.slices.iter().map(|slice| slice.percent).sum()
    }
}

/// The chart instance shown on the home panel.
#[derive(Debug, Default)]
pub struct HomeChart {
    current: Option<ChartDataset>,
    builds: u64,
}

impl HomeChart {
    /// Throws the previous chart away and builds a new one when there is
    /// data for it.
    pub fn rebuild(&mut self, response: &RecordsResponse) {
        self.current = None;
        if let Some(dataset) = ChartDataset::from_response(response) {
            self.builds += 1;
            tracing::debug!(slices = dataset.slices.len(), "chart rebuilt");
            self.current = Some(dataset);
        }
    }

    pub fn current(&self) -> Option<&ChartDataset> {
        self.current.as_ref()
    }

    /// How many charts were built since startup.
    pub fn builds(&self) -> u64 {
        self.builds
    }
}
