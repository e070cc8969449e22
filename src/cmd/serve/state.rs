// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::MutexGuard;
use std::sync::PoisonError;

use tokio::sync::oneshot::Sender;

use crate::session::Session;

#[derive(Clone)]
pub struct ServerState {
    pub session: Arc<Mutex<Session>>,
    pub shutdown_tx: Arc<Mutex<Option<Sender<()>>>>,
}

impl ServerState {
    /// Lock the session for the duration of one request.
    pub fn session(&self) -> MutexGuard<'_, Session> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Ask the server to stop. Returns false if it was already asked.
    pub fn shutdown(&self) -> bool {
        let sender = self
            .shutdown_tx
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        match sender {
            Some(tx) => tx.send(()).is_ok(),
            None => false,
        }
    }
}
