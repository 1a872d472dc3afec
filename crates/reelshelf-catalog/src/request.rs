use std::fmt;

/// The `requestID` values understood by the aggregation endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestId {
    TrendingMovie,
    TopRatedMovie,
    TrendingTvDay,
    MovieData,
    TvData,
    MovieVideos,
    TvVideos,
    MovieImages,
    TvImages,
    SearchMulti,
    MovieVideoProvider,
    TvVideoProvider,
}

impl RequestId {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestId::TrendingMovie => "trendingMovie",
            RequestId::TopRatedMovie => "topRatedMovie",
            RequestId::TrendingTvDay => "trendingTvDay",
            RequestId::MovieData => "movieData",
            RequestId::TvData => "tvData",
            RequestId::MovieVideos => "movieVideos",
            RequestId::TvVideos => "tvVideos",
            RequestId::MovieImages => "movieImages",
            RequestId::TvImages => "tvImages",
            RequestId::SearchMulti => "searchMulti",
            RequestId::MovieVideoProvider => "movieVideoProvider",
            RequestId::TvVideoProvider => "tvVideoProvider",
        }
    }

    /// Whether the endpoint takes the `language` parameter.
    pub fn is_localized(&self) -> bool {
        !matches!(
            self,
            RequestId::MovieImages
                | RequestId::TvImages
                | RequestId::SearchMulti
                | RequestId::MovieVideoProvider
                | RequestId::TvVideoProvider
        )
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
