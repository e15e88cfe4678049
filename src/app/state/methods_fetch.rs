use super::*;

impl AppState {
    fn current_request(&self) -> FetchRequest {
        FetchRequest {
            query: self.query.clone(),
            units: self.settings.units,
            locale: self.settings.locale,
        }
    }

    /// Spawns one load for the current query. While a load is in flight no
    /// second one starts; [`Self::finish_fetch`] catches up afterwards if the
    /// request changed in the meantime.
    pub(crate) async fn start_fetch(&mut self, tx: &mpsc::Sender<AppEvent>) -> Result<()> {
        if self.fetch_in_flight {
            debug!("fetch already in flight, queued behind it");
            return Ok(());
        }
        let request = self.current_request();
        self.fetch_in_flight = true;
        self.in_flight_request = Some(request.clone());
        tx.send(AppEvent::FetchStarted).await?;

        let clients = self.clients.clone();
        let tx2 = tx.clone();
        tokio::spawn(async move {
            let FetchRequest {
                query,
                units,
                locale,
            } = request;
            let event = match clients.load_snapshot(&query, units, locale).await {
                Ok(snapshot) => AppEvent::FetchSucceeded(Box::new(snapshot)),
                Err(err) => AppEvent::FetchFailed(format!("{err:#}")),
            };
            let _ = tx2.send(event).await;
        });
        Ok(())
    }

    /// Clears the in-flight flag. Returns `true` when the finished load no
    /// longer matches what is on screen; its result must then be dropped and
    /// a load for the current request has been started.
    pub(crate) async fn finish_fetch(&mut self, tx: &mpsc::Sender<AppEvent>) -> Result<bool> {
        self.fetch_in_flight = false;
        let Some(finished) = self.in_flight_request.take() else {
            return Ok(false);
        };
        if finished == self.current_request() {
            return Ok(false);
        }
        info!("dropping forecast for a superseded request");
        self.start_fetch(tx).await?;
        Ok(true)
    }
}
