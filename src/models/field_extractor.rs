use crate::models::{
    DocumentId, DocumentTextSource, OverviewRecord, OverviewScan, SubmarketLocator,
};
use crate::types::PageText;
use crate::Error;
use log::{debug, info};

pub struct ExtractorConfig {
    /// Phrase identifying the page which lists the report's submarket.
    pub submarket_cluster_marker: &'static str,
    /// Value for columns the report never carries (lease expiration, current rent).
    pub placeholder_value: &'static str,
}

pub struct FieldExtractor<'a> {
    config: &'a ExtractorConfig,
}

impl<'a> FieldExtractor<'a> {
    pub fn new(config: &'a ExtractorConfig) -> Self {
        FieldExtractor { config }
    }

    pub fn extract<D: DocumentTextSource>(
        &self,
        document_id: &DocumentId,
        document: &D,
    ) -> Result<OverviewRecord, Error> {
        if document.page_count() == 0 {
            return Err(Error::DocumentError("Document has no pages".to_string()));
        }

        let first_page = document.page_text(0)?;
        let cluster_page = self.find_cluster_page(document, &first_page)?;

        self.extract_from_text(document_id, &first_page, cluster_page.as_deref())
    }

    /// The first page after page one carrying the cluster marker; page one
    /// itself when no later page does but it carries the marker.
    fn find_cluster_page<D: DocumentTextSource>(
        &self,
        document: &D,
        first_page: &str,
    ) -> Result<Option<PageText>, Error> {
        let marker = self.config.submarket_cluster_marker;

        for page_idx in 1..document.page_count() {
            let page_text = document.page_text(page_idx)?;

            if page_text.contains(marker) {
                debug!("Found {:?} on page {}", marker, page_idx + 1);
                return Ok(Some(page_text));
            }
        }

        if first_page.contains(marker) {
            return Ok(Some(first_page.to_string()));
        }

        Ok(None)
    }

    pub fn extract_from_text(
        &self,
        document_id: &DocumentId,
        first_page: &str,
        cluster_page: Option<&str>,
    ) -> Result<OverviewRecord, Error> {
        let lines: Vec<&str> = first_page.lines().map(str::trim).collect();

        info!("Scanning {} lines for {}...", lines.len(), document_id.address);
        let scan = OverviewScan::scan(&lines);

        let market = document_id.market.clone().or_else(|| scan.market.clone());

        // Without a cluster page the record simply carries no submarket
        let submarket = match cluster_page {
            Some(page_text) => self.locate_submarket(document_id, page_text, market.as_deref())?,
            None => {
                debug!("No submarket cluster page for {}", document_id.address);
                String::new()
            }
        };

        scan.finalize(document_id, &submarket, self.config.placeholder_value)
    }

    /// The market's listing on the cluster page, else the page's own
    /// `Submarket <name>` label.
    fn locate_submarket(
        &self,
        document_id: &DocumentId,
        page_text: &str,
        market: Option<&str>,
    ) -> Result<String, Error> {
        match market {
            Some(market) => {
                if let Some(submarket) = SubmarketLocator::new(market)?.locate(page_text) {
                    return Ok(submarket);
                }
                debug!("No {} listing on the cluster page of {}", market, document_id.address);
            }
            None => debug!("No market name for {}", document_id.address),
        }

        Ok(SubmarketLocator::locate_label(page_text).unwrap_or_default())
    }
}
