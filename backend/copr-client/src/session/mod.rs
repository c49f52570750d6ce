//! Connection and authentication context for one CLI invocation.

use crate::config::CoprConfiguration;
use crate::error::RpcError;
use crate::rpc::{
    self, BuildCommand, BuildDetailsCommand, CancelBuildCommand, ListCommand,
    ProjectChrootCommand, ProjectDetailsCommand, RpcCommand, SearchCommand,
};
use crate::transport::{HttpTransport, Transport};

use models::{
    BuildDetails, BuildDetailsRequest, BuildRequest, BuildResult, CancelBuildRequest,
    CancelResult, ChrootDetails, ListRequest, ListResult, ProjectChrootRequest, ProjectDetails,
    ProjectDetailsRequest, SearchRequest,
};

use log::{debug, info};

/// Owns the transport and configuration for the lifetime of one invocation.
///
/// Commands run one at a time (`&mut self`). The transport is released when
/// the session is closed or dropped, whichever comes first, so an early
/// return through `?` still releases it.
pub struct Session<T: Transport = HttpTransport> {
    configuration: CoprConfiguration,
    transport: T,
    commands_executed: usize,
    released: bool,
}

impl Session<HttpTransport> {
    /// Open a session backed by a `reqwest` client using the configured timeout.
    pub fn open(configuration: CoprConfiguration) -> Result<Self, RpcError> {
        let transport = HttpTransport::new(configuration.timeout())?;
        Ok(Self::with_transport(configuration, transport))
    }
}

impl<T: Transport> Session<T> {
    pub fn with_transport(configuration: CoprConfiguration, transport: T) -> Self {
        info!(
            "Session opened for {} against {} (credentials: {})",
            configuration.username(),
            configuration.base_url(),
            if configuration.credentials().is_some() {
                "present"
            } else {
                "absent"
            }
        );

        Self {
            configuration,
            transport,
            commands_executed: 0,
            released: false,
        }
    }

    pub fn configuration(&self) -> &CoprConfiguration {
        &self.configuration
    }

    /// Number of commands run so far, successful or not.
    pub fn commands_executed(&self) -> usize {
        self.commands_executed
    }

    /// Run any command against this session.
    pub async fn run<C>(&mut self, command: &C) -> Result<C::Output, RpcError>
    where
        C: RpcCommand + ?Sized,
    {
        self.commands_executed += 1;
        rpc::execute(command, &self.configuration, &self.transport).await
    }

    pub async fn build(&mut self, request: &BuildRequest) -> Result<BuildResult, RpcError> {
        self.run(&BuildCommand::new(request)).await
    }

    pub async fn list(&mut self, request: &ListRequest) -> Result<ListResult, RpcError> {
        self.run(&ListCommand::new(request)).await
    }

    pub async fn build_details(
        &mut self,
        request: &BuildDetailsRequest,
    ) -> Result<BuildDetails, RpcError> {
        self.run(&BuildDetailsCommand::new(request)).await
    }

    pub async fn cancel_build(
        &mut self,
        request: &CancelBuildRequest,
    ) -> Result<CancelResult, RpcError> {
        self.run(&CancelBuildCommand::new(request)).await
    }

    pub async fn project_details(
        &mut self,
        request: &ProjectDetailsRequest,
    ) -> Result<ProjectDetails, RpcError> {
        self.run(&ProjectDetailsCommand::new(request)).await
    }

    pub async fn project_chroot(
        &mut self,
        request: &ProjectChrootRequest,
    ) -> Result<ChrootDetails, RpcError> {
        self.run(&ProjectChrootCommand::new(request)).await
    }

    pub async fn search(&mut self, request: &SearchRequest) -> Result<ListResult, RpcError> {
        self.run(&SearchCommand::new(request)).await
    }

    /// End the session now instead of at scope exit.
    pub fn close(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if self.released {
            return;
        }
        self.released = true;
        self.transport.release();
        debug!(
            "Session closed after {} command(s)",
            self.commands_executed
        );
    }
}

impl<T: Transport> Drop for Session<T> {
    fn drop(&mut self) {
        self.release();
    }
}
