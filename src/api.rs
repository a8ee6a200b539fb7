pub mod data_api; // YouTube Data API v3 クライアント
pub mod fetcher; // メトリクス・コメント取得
pub mod youtube;
